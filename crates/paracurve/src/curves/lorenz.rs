use crate::{
    error,
    parametric::{ParametricCurve, Points},
    point::Point3,
    validate,
};

/// Prandtl number.
pub const SIGMA: f64 = 10.0;
/// Rayleigh number.
pub const RHO: f64 = 28.0;
/// Geometric factor.
pub const BETA: f64 = 8.0 / 3.0;
/// Starting state, slightly off the origin fixed point.
pub const INITIAL_STATE: Point3 = Point3::new(0.1, 0.0, 0.0);
/// Factor applied to every emitted state.
pub const SCALE: f64 = 10.0;

/// Configuration for a [`Lorenz`] trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzConfig {
    /// Number of points to emit.
    pub steps: usize,
    /// Integration time step.
    pub dt: f64,
}

impl Default for LorenzConfig {
    fn default() -> Self {
        Self {
            steps: 25_000,
            dt: 0.01,
        }
    }
}

/// Time derivative of the Lorenz system at `state`.
pub fn derivative(state: Point3) -> Point3 {
    let Point3 { x, y, z } = state;
    Point3::new(SIGMA * (y - x), x * (RHO - z) - y, x * y - BETA * z)
}

/// A trajectory of the Lorenz attractor with the classic constants.
///
/// The system is advanced by fixed-step explicit Euler integration. Each
/// iteration emits the current state (scaled by [`SCALE`]) before stepping,
/// so the first point is always the initial condition. Large `dt` values
/// diverge; that is accepted behaviour rather than an error.
#[derive(Clone, Debug)]
pub struct Lorenz {
    /// Validated configuration.
    config: LorenzConfig,
}

impl Lorenz {
    /// Validate `config` and build the trajectory.
    pub fn new(config: LorenzConfig) -> error::Result<Self> {
        validate::steps(config.steps)?;
        validate::positive("dt", config.dt)?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &LorenzConfig {
        &self.config
    }
}

/// Iterator carrying the integration state of one run.
struct Trajectory {
    /// Current unscaled state.
    state: Point3,
    /// Time step.
    dt: f64,
    /// Points still to emit.
    remaining: usize,
}

impl Iterator for Trajectory {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let emitted = self.state.scale(SCALE);
        let d = derivative(self.state);
        self.state.x += d.x * self.dt;
        self.state.y += d.y * self.dt;
        self.state.z += d.z * self.dt;
        Some(emitted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ParametricCurve for Lorenz {
    fn name(&self) -> &'static str {
        "Lorenz"
    }

    fn info(&self) -> &'static str {
        "Chaotic attractor of the Lorenz convection model (σ=10, ρ=28, β=8/3).\n\
        Integrated with fixed-step Euler from (0.1, 0, 0); the output is\n\
        scaled by 10 so it fits a view of comparable size to the other curves."
    }

    fn steps(&self) -> usize {
        self.config.steps
    }

    fn points(&self) -> Points<'_> {
        Box::new(Trajectory {
            state: INITIAL_STATE,
            dt: self.config.dt,
            remaining: self.config.steps,
        })
    }
}
