//! Property-based tests for closure, boundary and surface invariants of the generators.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use paracurve::{
    ParametricCurve, Point3,
    curves::{
        Lissajous, LissajousConfig, Lorenz, LorenzConfig, SpiralSphere, SpiralSphereConfig,
        TorusKnot, TorusKnotConfig, lorenz,
    },
    ops,
};
use proptest::prelude::*;

#[test]
fn lissajous_unit_frequencies_close_after_one_turn() {
    let curve = Lissajous::new(LissajousConfig {
        a: 1,
        b: 1,
        c: 1,
        phase_x: 0.0,
        phase_y: 0.0,
        phase_z: 0.0,
        steps: 360,
        ..LissajousConfig::default()
    })
    .expect("valid lissajous");

    assert_eq!(curve.period(), 1);
    assert_eq!(curve.t_max(), TAU);

    let first = curve.points().next().expect("one point");
    let closing = curve.sample(curve.parameter(curve.steps()));
    assert_relative_eq!(first.x, closing.x, epsilon = 1e-9);
    assert_relative_eq!(first.y, closing.y, epsilon = 1e-9);
    assert_relative_eq!(first.z, closing.z, epsilon = 1e-9);
}

#[test]
fn lorenz_runs_are_bit_identical() {
    let config = LorenzConfig {
        steps: 5000,
        dt: 0.005,
    };
    let a = Lorenz::new(config).expect("valid").generate();
    let b = Lorenz::new(config).expect("valid").generate();
    for (p, q) in a.iter().zip(b.iter()) {
        assert_eq!(p.x.to_bits(), q.x.to_bits());
        assert_eq!(p.y.to_bits(), q.y.to_bits());
        assert_eq!(p.z.to_bits(), q.z.to_bits());
    }
}

#[test]
fn lorenz_first_point_is_initial_state() {
    let seq = Lorenz::new(LorenzConfig { steps: 1, dt: 0.01 })
        .expect("valid")
        .generate();
    assert_eq!(seq.as_slice(), &[Point3::new(1.0, 0.0, 0.0)]);
    assert_eq!(seq[0], lorenz::INITIAL_STATE.scale(lorenz::SCALE));
}

#[test]
fn spiral_sphere_runs_pole_to_pole() {
    let config = SpiralSphereConfig {
        steps: 1000,
        radius: 200.0,
        turns: 30.0,
    };
    let curve = SpiralSphere::new(config).expect("valid");
    let seq = curve.generate();

    let first = seq[0];
    assert_eq!(first.y, -200.0);
    assert_relative_eq!(first.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(first.z, 0.0, epsilon = 1e-9);

    let last = seq[seq.len() - 1];
    assert_relative_eq!(last.y, 200.0 - curve.y_step(), epsilon = 1e-9);
}

#[test]
fn torus_knot_points_lie_on_tube() {
    let knot = TorusKnot::new(TorusKnotConfig {
        p: 3,
        q: 2,
        major_radius: 100.0,
        minor_radius: 50.0,
        steps: 4,
    })
    .expect("valid");

    for (i, pt) in knot.points().enumerate() {
        let t = knot.parameter(i);
        let ring = 100.0 + 50.0 * (3.0 * t).cos();
        assert_relative_eq!(pt.x * pt.x + pt.y * pt.y, ring * ring, max_relative = 1e-12);
        assert_relative_eq!(pt.z, 50.0 * (3.0 * t).sin(), epsilon = 1e-12);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Lissajous emits exactly `steps` points, starting at the phase offsets.
    #[test]
    fn lissajous_length_and_first_point(
        a in 1u32..12,
        b in 1u32..12,
        c in 1u32..12,
        phase in -3.2f64..3.2,
        amp in 0.5f64..500.0,
        steps in 1usize..400,
    ) {
        let curve = Lissajous::new(LissajousConfig {
            a, b, c,
            phase_x: phase,
            phase_y: phase / 2.0,
            phase_z: -phase,
            amp_x: amp,
            amp_y: amp * 2.0,
            amp_z: amp / 3.0,
            steps,
        }).expect("valid lissajous");

        let seq = curve.generate();
        prop_assert_eq!(seq.len(), steps);
        prop_assert_eq!(
            seq[0],
            Point3::new(amp * phase.sin(), amp * 2.0 * (phase / 2.0).sin(), amp / 3.0 * (-phase).sin())
        );
    }

    /// Every Lissajous period is a common multiple of all three frequencies.
    #[test]
    fn lissajous_period_is_common_multiple(a in 1u32..1000, b in 1u32..1000, c in 1u32..1000) {
        let period = ops::lcm3(a, b, c);
        prop_assert_eq!(period % u128::from(a), 0);
        prop_assert_eq!(period % u128::from(b), 0);
        prop_assert_eq!(period % u128::from(c), 0);
        prop_assert!(period <= u128::from(a) * u128::from(b) * u128::from(c));
    }

    /// gcd divides both arguments and lcm·gcd equals the product.
    #[test]
    fn gcd_lcm_identity(a in 1u128..100_000, b in 1u128..100_000) {
        let g = ops::gcd(a, b);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
        prop_assert_eq!(ops::lcm(a, b) * g, a * b);
    }

    /// Spiral points stay on or inside the sphere and rise monotonically.
    #[test]
    fn spiral_sphere_stays_on_sphere(
        steps in 1usize..500,
        radius in 0.1f64..1000.0,
        turns in 0.1f64..50.0,
    ) {
        let seq = SpiralSphere::new(SpiralSphereConfig { steps, radius, turns })
            .expect("valid spiral")
            .generate();
        prop_assert_eq!(seq.len(), steps);
        for pair in seq.windows(2) {
            prop_assert!(pair[1].y > pair[0].y);
        }
        for p in seq.iter() {
            prop_assert!(p.is_finite());
            let r = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
            prop_assert!((r - radius).abs() <= radius * 1e-9, "{:?} off sphere {}", p, radius);
        }
    }

    /// Torus knot points are at distance `r` from the tube centre circle.
    #[test]
    fn torus_knot_on_surface(
        p in 1u32..9,
        q in 1u32..9,
        major in 10.0f64..200.0,
        minor_frac in 0.05f64..0.95,
        steps in 1usize..300,
    ) {
        let minor = major * minor_frac;
        let knot = TorusKnot::new(TorusKnotConfig {
            p, q,
            major_radius: major,
            minor_radius: minor,
            steps,
        }).expect("valid knot");
        let seq = knot.generate();
        prop_assert_eq!(seq.len(), steps);
        for pt in seq.iter() {
            let axial = (pt.x * pt.x + pt.y * pt.y).sqrt() - major;
            let tube = (axial * axial + pt.z * pt.z).sqrt();
            prop_assert!((tube - minor).abs() <= major * 1e-9);
        }
    }
}
