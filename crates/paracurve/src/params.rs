use crate::{
    curves::{Lissajous, Lorenz, SpiralSphere, TorusKnot},
    parametric::{ParametricCurve, Points},
    registry::CurveKind,
};

/// A validated curve of any supported kind.
///
/// Callers build one of these per invocation and hand it to whatever
/// consumes the points; dispatch happens on the variant.
#[derive(Clone, Debug)]
pub enum CurveParams {
    /// Lissajous curve.
    Lissajous(Lissajous),
    /// Lorenz attractor.
    Lorenz(Lorenz),
    /// Spiral sphere.
    SpiralSphere(SpiralSphere),
    /// Torus knot.
    TorusKnot(TorusKnot),
}

impl CurveParams {
    /// Which curve family this is.
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Lissajous(_) => CurveKind::Lissajous,
            Self::Lorenz(_) => CurveKind::Lorenz,
            Self::SpiralSphere(_) => CurveKind::SpiralSphere,
            Self::TorusKnot(_) => CurveKind::TorusKnot,
        }
    }

    /// The wrapped curve as a trait object.
    pub fn as_curve(&self) -> &dyn ParametricCurve {
        match self {
            Self::Lissajous(c) => c,
            Self::Lorenz(c) => c,
            Self::SpiralSphere(c) => c,
            Self::TorusKnot(c) => c,
        }
    }
}

impl ParametricCurve for CurveParams {
    fn name(&self) -> &'static str {
        self.as_curve().name()
    }
    fn info(&self) -> &'static str {
        self.as_curve().info()
    }
    fn steps(&self) -> usize {
        self.as_curve().steps()
    }
    fn points(&self) -> Points<'_> {
        self.as_curve().points()
    }
}

impl From<Lissajous> for CurveParams {
    fn from(c: Lissajous) -> Self {
        Self::Lissajous(c)
    }
}

impl From<Lorenz> for CurveParams {
    fn from(c: Lorenz) -> Self {
        Self::Lorenz(c)
    }
}

impl From<SpiralSphere> for CurveParams {
    fn from(c: SpiralSphere) -> Self {
        Self::SpiralSphere(c)
    }
}

impl From<TorusKnot> for CurveParams {
    fn from(c: TorusKnot) -> Self {
        Self::TorusKnot(c)
    }
}
