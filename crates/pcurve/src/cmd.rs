//! Command handlers for the `pcurve` CLI.
//!
//! These functions generate curves, write the resulting point files to disk
//! and read them back for inspection.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
    time::Instant,
};

use anyhow::{Context, Result};
use paracurve::{Bounds, CurveParams, ParametricCurve, PointSequence, format};
use tracing::{debug, info};

/// Outcome of writing a curve to disk.
pub struct GenerateReport {
    /// Number of points written.
    pub count: usize,
    /// Extent of the written points.
    pub bounds: Option<Bounds>,
}

/// Human readable description of the parameters, one line per entry.
pub fn summary(params: &CurveParams) -> Vec<String> {
    match params {
        CurveParams::Lissajous(curve) => {
            let c = curve.config();
            vec![
                format!("Generating 3D Lissajous Curve ({}:{}:{})...", c.a, c.b, c.c),
                format!("  Frequencies: a={}, b={}, c={}", c.a, c.b, c.c),
                format!(
                    "  Phases: δx={:.4}, δy={:.4}, δz={:.4}",
                    c.phase_x, c.phase_y, c.phase_z
                ),
                format!("  Amplitudes: Ax={}, Ay={}, Az={}", c.amp_x, c.amp_y, c.amp_z),
                format!("  Closure period: {} turns", curve.period()),
                format!("  Steps: {}", c.steps),
            ]
        }
        CurveParams::Lorenz(curve) => {
            let c = curve.config();
            vec![
                "Generating Lorenz Attractor coordinates...".to_string(),
                format!("  Time step: {}", c.dt),
                format!("  Steps: {}", c.steps),
            ]
        }
        CurveParams::SpiralSphere(curve) => {
            let c = curve.config();
            vec![
                "Generating Spiral Sphere...".to_string(),
                format!("  Radius: {}", c.radius),
                format!("  Turns: {}", c.turns),
                format!("  Steps: {}", c.steps),
            ]
        }
        CurveParams::TorusKnot(curve) => {
            let c = curve.config();
            vec![
                format!("Generating ({},{}) Torus Knot...", c.p, c.q),
                format!("  Major radius (R): {}", c.major_radius),
                format!("  Minor radius (r): {}", c.minor_radius),
                format!("  Steps: {}", c.steps),
            ]
        }
    }
}

/// One-line description of a bounding box.
pub fn describe_bounds(bounds: &Bounds) -> String {
    format!(
        "Bounds: x [{:.3}, {:.3}], y [{:.3}, {:.3}], z [{:.3}, {:.3}]",
        bounds.min.x, bounds.max.x, bounds.min.y, bounds.max.y, bounds.min.z, bounds.max.z
    )
}

/// Generate every point of `params` and write the point file at `output`.
///
/// The sequence is fully materialized before the file is created.
pub fn write_curve(params: &CurveParams, output: &Path) -> Result<GenerateReport> {
    let started = Instant::now();
    let points = params.generate();
    debug!(
        curve = params.kind().key(),
        points = points.len(),
        elapsed = ?started.elapsed(),
        "generated curve"
    );

    let file = File::create(output)
        .with_context(|| format!("failed to create '{}'", output.display()))?;
    let mut writer = BufWriter::new(file);
    let count = format::write_points(&mut writer, &points)
        .with_context(|| format!("failed to write '{}'", output.display()))?;
    info!(path = %output.display(), count, "wrote point file");

    Ok(GenerateReport {
        count,
        bounds: points.bounds(),
    })
}

/// Read a point file.
pub fn inspect(input: &Path) -> Result<PointSequence> {
    let file =
        File::open(input).with_context(|| format!("failed to open '{}'", input.display()))?;
    let points = format::read_points(BufReader::new(file))
        .with_context(|| format!("failed to read '{}'", input.display()))?;
    debug!(path = %input.display(), points = points.len(), "read point file");
    Ok(points)
}
