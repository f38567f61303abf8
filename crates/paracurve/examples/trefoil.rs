//! Minimal torus knot example: generate a trefoil and print the first lines of its point stream.

use std::{error::Error, io};

use paracurve::{
    ParametricCurve,
    curves::{TorusKnot, TorusKnotConfig},
    format,
};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    let knot = TorusKnot::new(TorusKnotConfig {
        steps: 8,
        ..TorusKnotConfig::default()
    })?;
    println!("{} with {} points:", knot.name(), knot.steps());

    let points = knot.generate();
    format::write_points(&mut io::stdout().lock(), &points)?;

    let bounds = points.bounds().ok_or("empty curve")?;
    println!("extent: {:?}", bounds.size());
    // snips-end: example

    Ok(())
}
