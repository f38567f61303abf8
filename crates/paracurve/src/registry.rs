//! Curve metadata shared by the CLI and library.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// The supported curve families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Closed-form trig curve.
    Lissajous,
    /// Chaotic attractor.
    Lorenz,
    /// Spiral on a sphere.
    SpiralSphere,
    /// (p, q) torus knot.
    TorusKnot,
}

/// Metadata describing one curve family.
#[derive(Debug)]
pub struct RegistryEntry {
    /// The curve family.
    pub kind: CurveKind,
    /// Lowercase key used on the command line.
    pub key: &'static str,
    /// Display name.
    pub display: &'static str,
    /// Human readable parameter constraints.
    pub constraints: &'static str,
}

/// All supported curves in display order.
pub const REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        kind: CurveKind::Lissajous,
        key: "lissajous",
        display: "Lissajous",
        constraints: "a, b, c ≥ 1; amplitudes > 0; steps ≥ 1",
    },
    RegistryEntry {
        kind: CurveKind::Lorenz,
        key: "lorenz",
        display: "Lorenz",
        constraints: "dt > 0; steps ≥ 1",
    },
    RegistryEntry {
        kind: CurveKind::SpiralSphere,
        key: "spiral-sphere",
        display: "Spiral Sphere",
        constraints: "radius > 0; turns > 0; steps ≥ 1",
    },
    RegistryEntry {
        kind: CurveKind::TorusKnot,
        key: "torus-knot",
        display: "Torus Knot",
        constraints: "p, q ≥ 1; radii > 0 (minor < major recommended); steps ≥ 1",
    },
];

/// Lowercase keys of all supported curves.
pub const CURVE_NAMES: &[&str] = &["lissajous", "lorenz", "spiral-sphere", "torus-knot"];

impl CurveKind {
    /// Registry entry for this kind.
    pub fn entry(self) -> &'static RegistryEntry {
        // REGISTRY lists every variant once, in declaration order.
        &REGISTRY[self as usize]
    }

    /// Lowercase key.
    pub fn key(self) -> &'static str {
        self.entry().key
    }

    /// Look up a kind by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        REGISTRY.iter().find(|e| e.key == key).map(|e| e.kind)
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry().display)
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| {
            Error::invalid(
                "curve",
                format!("unknown curve '{s}'; valid options: {}", CURVE_NAMES.join(", ")),
            )
        })
    }
}
