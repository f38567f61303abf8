//! Core library for generating parametric 3D curves.
//!
//! Exposes curve implementations and the [`ParametricCurve`] trait used by
//! the CLI crate in this workspace. Every curve produces a finite, ordered
//! sequence of points which is deterministic for a given configuration.
//!
//! # Supported Curves
//!
//! - Lissajous
//! - Lorenz attractor
//! - Spiral sphere
//! - Torus knot

/// Implementations of specific parametric curves.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Plain-text point stream reading and writing.
pub mod format;
/// Integer helpers used for closure period calculations.
pub mod ops;
/// Validated parameter dispatch over all curve kinds.
mod params;
/// 3D points and point sequences.
pub mod point;
/// The `ParametricCurve` trait.
mod parametric;
/// Central registry of curve metadata.
pub mod registry;
/// Parameter validation helpers shared across curves.
pub mod validate;

pub use crate::{
    params::CurveParams,
    parametric::{ParametricCurve, Points},
    point::{Bounds, Point3, PointSequence},
};
