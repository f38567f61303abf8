//! Plain-text point stream codec.
//!
//! One point per line, `x,y,z`, each field written as a fixed-point decimal
//! with six fractional digits. No header and no trailer. Downstream viewers
//! read this format directly, so field formatting must stay exactly as is.

use std::io::{BufRead, Write};

use crate::{
    error::{Error, Result},
    point::{Point3, PointSequence},
};

/// Append one coordinate with six fractional digits.
///
/// Non-finite values only arise from a diverging Lorenz run and are spelled
/// `inf`, `-inf` and `nan`.
fn push_field(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("nan");
    } else if v.is_infinite() {
        out.push_str(if v > 0.0 { "inf" } else { "-inf" });
    } else {
        out.push_str(&format!("{v:.6}"));
    }
}

/// Format a point as a single `x,y,z` line without the newline.
pub fn format_point(p: &Point3) -> String {
    let mut out = String::with_capacity(48);
    push_field(&mut out, p.x);
    out.push(',');
    push_field(&mut out, p.y);
    out.push(',');
    push_field(&mut out, p.z);
    out
}

/// Write points to `writer`, one newline-terminated line each, in order.
///
/// Returns the number of points written.
pub fn write_points<'a, W, I>(writer: &mut W, points: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Point3>,
{
    let mut count = 0;
    for p in points {
        writeln!(writer, "{}", format_point(p))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Parse one coordinate field.
fn parse_field(line: usize, axis: &str, field: &str) -> Result<f64> {
    let field = field.trim();
    field.parse::<f64>().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {axis} coordinate '{field}'"),
    })
}

/// Parse a single `x,y,z` line.
pub fn parse_point(line: usize, text: &str) -> Result<Point3> {
    let mut fields = text.split(',');
    let (Some(x), Some(y), Some(z), None) = (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(Error::Parse {
            line,
            message: format!("expected 3 comma-separated fields, got '{}'", text.trim()),
        });
    };
    Ok(Point3::new(
        parse_field(line, "x", x)?,
        parse_field(line, "y", y)?,
        parse_field(line, "z", z)?,
    ))
}

/// Read a point stream. Blank lines are skipped.
pub fn read_points<R: BufRead>(reader: R) -> Result<PointSequence> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_point(idx + 1, &line)?);
    }
    Ok(PointSequence::new(points))
}
