/// Closed-form Lissajous curve with LCM-derived closure.
pub mod lissajous;
/// Lorenz attractor traced by explicit Euler integration.
pub mod lorenz;
/// Spiral wound around the surface of a sphere.
pub mod spiral_sphere;
/// (p, q) torus knot.
pub mod torus_knot;

pub use self::{
    lissajous::{Lissajous, LissajousConfig},
    lorenz::{Lorenz, LorenzConfig},
    spiral_sphere::{SpiralSphere, SpiralSphereConfig},
    torus_knot::{TorusKnot, TorusKnotConfig},
};

use std::f64::consts::TAU;

/// Uniform sample of `[0, t_max)`: `(index / steps) * t_max`.
fn uniform_parameter(index: usize, steps: usize, t_max: f64) -> f64 {
    (index as f64 / steps as f64) * t_max
}

/// Parameter range covering `period` full turns.
fn turns(period: f64) -> f64 {
    TAU * period
}
