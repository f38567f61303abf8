use crate::{
    curves::{turns, uniform_parameter},
    error,
    parametric::{ParametricCurve, Points},
    point::Point3,
    validate,
};

/// Configuration for a [`TorusKnot`]. Defaults give the trefoil, (3, 2).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusKnotConfig {
    /// Winding number around the tube.
    pub p: u32,
    /// Winding number around the torus axis.
    pub q: u32,
    /// Distance from the torus centre to the tube centre.
    pub major_radius: f64,
    /// Tube radius. Should be smaller than `major_radius`; not enforced.
    pub minor_radius: f64,
    /// Number of points to emit.
    pub steps: usize,
}

impl Default for TorusKnotConfig {
    fn default() -> Self {
        Self {
            p: 3,
            q: 2,
            major_radius: 100.0,
            minor_radius: 50.0,
            steps: 25_000,
        }
    }
}

/// A (p, q) torus knot:
/// `((R + r·cos(p·t))·cos(q·t), (R + r·cos(p·t))·sin(q·t), r·sin(p·t))`.
///
/// The parameter sweeps `2π·max(p, q)`. This is a visual closure heuristic,
/// not the exact closure period, and for some ratios the ends do not meet.
#[derive(Clone, Debug)]
pub struct TorusKnot {
    /// Validated configuration.
    config: TorusKnotConfig,
}

impl TorusKnot {
    /// Validate `config` and build the knot.
    pub fn new(config: TorusKnotConfig) -> error::Result<Self> {
        validate::positive_int("p", config.p)?;
        validate::positive_int("q", config.q)?;
        validate::positive("major_radius", config.major_radius)?;
        validate::positive("minor_radius", config.minor_radius)?;
        validate::steps(config.steps)?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &TorusKnotConfig {
        &self.config
    }

    /// True when the tube is at least as thick as the major radius, in which
    /// case the surface passes through its own axis.
    pub fn self_intersects(&self) -> bool {
        self.config.minor_radius >= self.config.major_radius
    }

    /// End of the sampled parameter range, `2π·max(p, q)`.
    pub fn t_max(&self) -> f64 {
        turns(f64::from(self.config.p.max(self.config.q)))
    }

    /// Parameter value for emission index `index`.
    pub fn parameter(&self, index: usize) -> f64 {
        uniform_parameter(index, self.config.steps, self.t_max())
    }

    /// Evaluate the knot at parameter `t`.
    pub fn sample(&self, t: f64) -> Point3 {
        let TorusKnotConfig {
            p,
            q,
            major_radius,
            minor_radius,
            ..
        } = self.config;
        let pt = f64::from(p) * t;
        let qt = f64::from(q) * t;
        let ring = major_radius + minor_radius * pt.cos();
        Point3::new(ring * qt.cos(), ring * qt.sin(), minor_radius * pt.sin())
    }
}

impl ParametricCurve for TorusKnot {
    fn name(&self) -> &'static str {
        "Torus Knot"
    }

    fn info(&self) -> &'static str {
        "A closed strand lying on the surface of a torus, winding p times\n\
        around the tube and q times around the central axis.\n\
        (3,2) is the trefoil, (5,2) the cinquefoil."
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
