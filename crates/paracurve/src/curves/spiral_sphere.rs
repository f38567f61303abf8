use std::f64::consts::PI;

use crate::{
    error,
    parametric::{ParametricCurve, Points},
    point::Point3,
    validate,
};

/// Configuration for a [`SpiralSphere`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralSphereConfig {
    /// Number of points to emit.
    pub steps: usize,
    /// Sphere radius.
    pub radius: f64,
    /// Number of full turns around the `y` axis from pole to pole.
    pub turns: f64,
}

impl Default for SpiralSphereConfig {
    fn default() -> Self {
        Self {
            steps: 25_000,
            radius: 200.0,
            turns: 30.0,
        }
    }
}

/// Radius of the sphere's horizontal cross-section at height `y`.
///
/// Rounding near the poles can push `radius² - y²` slightly below zero; that
/// is clamped to zero instead of yielding NaN.
pub fn cross_section_radius(radius: f64, y: f64) -> f64 {
    (radius * radius - y * y).max(0.0).sqrt()
}

/// A spiral wound around a sphere from the south pole (`y = -radius`)
/// towards the north pole.
///
/// Sampling is uniform in `y` and in azimuth, not in arc length, so points
/// bunch up near the poles. Both `y` and the angle are advanced by a fixed
/// increment per point; the last point sits at `y ≈ radius - y_step`.
#[derive(Clone, Debug)]
pub struct SpiralSphere {
    /// Validated configuration.
    config: SpiralSphereConfig,
}

impl SpiralSphere {
    /// Validate `config` and build the spiral.
    pub fn new(config: SpiralSphereConfig) -> error::Result<Self> {
        validate::steps(config.steps)?;
        validate::positive("radius", config.radius)?;
        validate::positive("turns", config.turns)?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SpiralSphereConfig {
        &self.config
    }

    /// Height increment between consecutive points.
    pub fn y_step(&self) -> f64 {
        (2.0 * self.config.radius) / self.config.steps as f64
    }

    /// Azimuth increment between consecutive points, in radians.
    pub fn angle_step(&self) -> f64 {
        self.config.turns * 2.0 * PI / self.config.steps as f64
    }
}

/// Iterator advancing height and azimuth by fixed increments.
struct Winding {
    /// Sphere radius.
    radius: f64,
    /// Current height.
    y: f64,
    /// Height increment.
    y_step: f64,
    /// Current azimuth.
    angle: f64,
    /// Azimuth increment.
    angle_step: f64,
    /// Points still to emit.
    remaining: usize,
}

impl Iterator for Winding {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let ring = cross_section_radius(self.radius, self.y);
        let p = Point3::new(self.angle.cos() * ring, self.y, self.angle.sin() * ring);
        self.y += self.y_step;
        self.angle += self.angle_step;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ParametricCurve for SpiralSphere {
    fn name(&self) -> &'static str {
        "Spiral Sphere"
    }

    fn info(&self) -> &'static str {
        "A single strand wound around a sphere from pole to pole.\n\
        Height rises linearly while the azimuth sweeps `turns` revolutions,\n\
        so windings crowd together near the poles."
    }

    fn steps(&self) -> usize {
        self.config.steps
    }

    fn points(&self) -> Points<'_> {
        Box::new(Winding {
            radius: self.config.radius,
            y: -self.config.radius,
            y_step: self.y_step(),
            angle: 0.0,
            angle_step: self.angle_step(),
            remaining: self.config.steps,
        })
    }
}
