use std::f64::consts::FRAC_PI_2;

use crate::{
    curves::{turns, uniform_parameter},
    error, ops,
    parametric::{ParametricCurve, Points},
    point::Point3,
    validate,
};

/// Configuration for a [`Lissajous`] curve.
///
/// The defaults trace the 3:4:5 figure with a quarter-turn phase on `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LissajousConfig {
    /// X-axis frequency.
    pub a: u32,
    /// Y-axis frequency.
    pub b: u32,
    /// Z-axis frequency.
    pub c: u32,
    /// X-axis phase shift in radians.
    pub phase_x: f64,
    /// Y-axis phase shift in radians.
    pub phase_y: f64,
    /// Z-axis phase shift in radians.
    pub phase_z: f64,
    /// X-axis amplitude.
    pub amp_x: f64,
    /// Y-axis amplitude.
    pub amp_y: f64,
    /// Z-axis amplitude.
    pub amp_z: f64,
    /// Number of points to emit.
    pub steps: usize,
}

impl Default for LissajousConfig {
    fn default() -> Self {
        Self {
            a: 3,
            b: 4,
            c: 5,
            phase_x: 0.0,
            phase_y: FRAC_PI_2,
            phase_z: 0.0,
            amp_x: 100.0,
            amp_y: 100.0,
            amp_z: 100.0,
            steps: 25_000,
        }
    }
}

impl LissajousConfig {
    /// Set all three amplitudes to `amp`.
    pub fn with_amplitude(self, amp: f64) -> Self {
        Self {
            amp_x: amp,
            amp_y: amp,
            amp_z: amp,
            ..self
        }
    }
}

/// A 3D Lissajous curve:
/// `(amp_x·sin(a·t+phase_x), amp_y·sin(b·t+phase_y), amp_z·sin(c·t+phase_z))`.
///
/// The parameter sweeps exactly one closure period, `2π·lcm(a, b, c)`, so the
/// emitted path is a single closed loop.
#[derive(Clone, Debug)]
pub struct Lissajous {
    /// Validated configuration.
    config: LissajousConfig,
    /// Closure period in turns, `lcm(a, b, c)`.
    period: u128,
}

impl Lissajous {
    /// Validate `config` and build the curve.
    pub fn new(config: LissajousConfig) -> error::Result<Self> {
        validate::positive_int("a", config.a)?;
        validate::positive_int("b", config.b)?;
        validate::positive_int("c", config.c)?;
        validate::finite("phase_x", config.phase_x)?;
        validate::finite("phase_y", config.phase_y)?;
        validate::finite("phase_z", config.phase_z)?;
        validate::positive("amp_x", config.amp_x)?;
        validate::positive("amp_y", config.amp_y)?;
        validate::positive("amp_z", config.amp_z)?;
        validate::steps(config.steps)?;

        Ok(Self {
            period: ops::lcm3(config.a, config.b, config.c),
            config,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &LissajousConfig {
        &self.config
    }

    /// Number of full turns after which the curve closes.
    pub fn period(&self) -> u128 {
        self.period
    }

    /// End of the sampled parameter range, `2π·period`.
    pub fn t_max(&self) -> f64 {
        turns(self.period as f64)
    }

    /// Parameter value for emission index `index`.
    ///
    /// `index == steps` is valid and gives `t_max`, the point where the loop
    /// closes.
    pub fn parameter(&self, index: usize) -> f64 {
        uniform_parameter(index, self.config.steps, self.t_max())
    }

    /// Evaluate the curve at parameter `t`.
    pub fn sample(&self, t: f64) -> Point3 {
        let c = &self.config;
        Point3::new(
            c.amp_x * (f64::from(c.a) * t + c.phase_x).sin(),
            c.amp_y * (f64::from(c.b) * t + c.phase_y).sin(),
            c.amp_z * (f64::from(c.c) * t + c.phase_z).sin(),
        )
    }
}

impl ParametricCurve for Lissajous {
    fn name(&self) -> &'static str {
        "Lissajous"
    }

    fn info(&self) -> &'static str {
        "Three sinusoids with integer frequency ratios, one per axis.\n\
        Sampled uniformly over lcm(a, b, c) full turns so the path closes\n\
        on itself; phases and amplitudes shape the figure."
    }

    fn steps(&self) -> usize {
        self.config.steps
    }

    fn points(&self) -> Points<'_> {
        let t_max = self.t_max();
        let steps = self.config.steps;
        Box::new((0..steps).map(move |i| self.sample(uniform_parameter(i, steps, t_max))))
    }
}
