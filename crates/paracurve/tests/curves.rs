//! Integration tests checking length, purity and streaming properties of every curve.
#[cfg(test)]
mod tests {
    use paracurve::{
        CurveParams, ParametricCurve,
        curves::{
            Lissajous, LissajousConfig, Lorenz, LorenzConfig, SpiralSphere, SpiralSphereConfig,
            TorusKnot, TorusKnotConfig,
        },
        error,
        registry::CurveKind,
    };

    fn curve(kind: CurveKind, steps: usize) -> error::Result<CurveParams> {
        Ok(match kind {
            CurveKind::Lissajous => Lissajous::new(LissajousConfig {
                steps,
                ..LissajousConfig::default()
            })?
            .into(),
            CurveKind::Lorenz => Lorenz::new(LorenzConfig {
                steps,
                ..LorenzConfig::default()
            })?
            .into(),
            CurveKind::SpiralSphere => SpiralSphere::new(SpiralSphereConfig {
                steps,
                ..SpiralSphereConfig::default()
            })?
            .into(),
            CurveKind::TorusKnot => TorusKnot::new(TorusKnotConfig {
                steps,
                ..TorusKnotConfig::default()
            })?
            .into(),
        })
    }

    fn has_exact_length(label: &str, c: &dyn ParametricCurve) {
        let seq = c.generate();
        assert_eq!(seq.len(), c.steps(), "{label} emitted wrong number of points");
        assert_eq!(c.points().count(), c.steps(), "{label} stream length mismatch");
    }

    fn is_pure(label: &str, c: &dyn ParametricCurve) {
        let first = c.generate();
        let second = c.generate();
        assert_eq!(first, second, "{label} differs between runs");
    }

    fn stream_matches_materialized(label: &str, c: &dyn ParametricCurve) {
        let seq = c.generate();
        for (i, (a, b)) in c.points().zip(seq.iter()).enumerate() {
            assert_eq!(a, *b, "{label} diverges between stream and sequence at {i}");
        }
    }

    fn is_finite(label: &str, c: &dyn ParametricCurve) {
        for (i, p) in c.points().enumerate() {
            assert!(p.is_finite(), "{label} produced non-finite point {p:?} at {i}");
        }
    }

    macro_rules! curve_tests {
        ($(($name:ident, $kind:expr, $steps:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<$name _length_ $steps>]() -> error::Result<()> {
                        let c = curve($kind, $steps)?;
                        has_exact_length(&format!("{}({})", stringify!($name), $steps), &c);
                        Ok(())
                    }

                    #[test]
                    fn [<$name _pure_ $steps>]() -> error::Result<()> {
                        let c = curve($kind, $steps)?;
                        is_pure(&format!("{}({})", stringify!($name), $steps), &c);
                        Ok(())
                    }

                    #[test]
                    fn [<$name _stream_ $steps>]() -> error::Result<()> {
                        let c = curve($kind, $steps)?;
                        stream_matches_materialized(&format!("{}({})", stringify!($name), $steps), &c);
                        Ok(())
                    }

                    #[test]
                    fn [<$name _finite_ $steps>]() -> error::Result<()> {
                        let c = curve($kind, $steps)?;
                        is_finite(&format!("{}({})", stringify!($name), $steps), &c);
                        Ok(())
                    }
                }
            )*
        };
    }

    curve_tests! {
        (lissajous, CurveKind::Lissajous, 1),
        (lissajous, CurveKind::Lissajous, 1000),
        (lorenz, CurveKind::Lorenz, 1),
        (lorenz, CurveKind::Lorenz, 25000),
        (spiral_sphere, CurveKind::SpiralSphere, 1),
        (spiral_sphere, CurveKind::SpiralSphere, 1000),
        (torus_knot, CurveKind::TorusKnot, 1),
        (torus_knot, CurveKind::TorusKnot, 1000),
    }

    #[test]
    fn kinds_round_trip_through_params() -> error::Result<()> {
        for kind in [
            CurveKind::Lissajous,
            CurveKind::Lorenz,
            CurveKind::SpiralSphere,
            CurveKind::TorusKnot,
        ] {
            assert_eq!(curve(kind, 10)?.kind(), kind);
        }
        Ok(())
    }

    #[test]
    fn lorenz_default_run_is_bounded() -> error::Result<()> {
        // The classic attractor stays within |x|,|y| < 30 and 0 ≤ z < 60 before scaling.
        let c = curve(CurveKind::Lorenz, 25000)?;
        let bounds = c.generate().bounds().expect("non-empty");
        assert!(bounds.min.x > -300.0 && bounds.max.x < 300.0, "{bounds:?}");
        assert!(bounds.min.y > -300.0 && bounds.max.y < 300.0, "{bounds:?}");
        assert!(bounds.min.z >= 0.0 && bounds.max.z < 600.0, "{bounds:?}");
        Ok(())
    }
}
