//! Command‑line entry point for the `pcurve` tool.
//!
//! Provides one subcommand per curve family, each writing a point file for
//! the 3D viewer, plus helpers to inspect point files and list curves.

use std::{
    fmt::Display,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use paracurve::{
    CurveParams,
    curves::{
        Lissajous, LissajousConfig, Lorenz, LorenzConfig, SpiralSphere, SpiralSphereConfig,
        TorusKnot, TorusKnotConfig,
    },
    registry,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// CLI command implementations.
mod cmd;

/// Default output file name expected by the viewer.
const DEFAULT_OUTPUT: &str = "data";

#[derive(Parser)]
#[command(name = "pcurve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(
        short,
        global = true,
        action = clap::ArgAction::Count,
        help = "Sets the level of verbosity"
    )]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Output destination shared by the generator subcommands.
#[derive(Args, Debug)]
struct OutputArgs {
    /// Path of the point file to write.
    #[arg(
        short = 'o',
        long = "output",
        default_value = DEFAULT_OUTPUT,
        help = "Output file path"
    )]
    output: PathBuf,
}

/// Lissajous curve parameters.
#[derive(Args, Debug)]
struct LissajousArgs {
    /// X-axis frequency.
    #[arg(long, default_value_t = LissajousConfig::default().a, allow_negative_numbers = true, help = "X-axis frequency")]
    a: u32,
    /// Y-axis frequency.
    #[arg(long, default_value_t = LissajousConfig::default().b, allow_negative_numbers = true, help = "Y-axis frequency")]
    b: u32,
    /// Z-axis frequency.
    #[arg(long, default_value_t = LissajousConfig::default().c, allow_negative_numbers = true, help = "Z-axis frequency")]
    c: u32,
    /// X-axis phase shift.
    #[arg(long, default_value_t = LissajousConfig::default().phase_x, allow_negative_numbers = true, help = "X-axis phase shift in radians")]
    phase_x: f64,
    /// Y-axis phase shift.
    #[arg(long, default_value_t = LissajousConfig::default().phase_y, allow_negative_numbers = true, help = "Y-axis phase shift in radians (default π/2)")]
    phase_y: f64,
    /// Z-axis phase shift.
    #[arg(long, default_value_t = LissajousConfig::default().phase_z, allow_negative_numbers = true, help = "Z-axis phase shift in radians")]
    phase_z: f64,
    /// Amplitude for all axes, overriding the per-axis values.
    #[arg(long, allow_negative_numbers = true, help = "Amplitude for all axes (overrides --amp-x/--amp-y/--amp-z)")]
    amp: Option<f64>,
    /// X-axis amplitude.
    #[arg(long, default_value_t = LissajousConfig::default().amp_x, allow_negative_numbers = true, help = "X-axis amplitude")]
    amp_x: f64,
    /// Y-axis amplitude.
    #[arg(long, default_value_t = LissajousConfig::default().amp_y, allow_negative_numbers = true, help = "Y-axis amplitude")]
    amp_y: f64,
    /// Z-axis amplitude.
    #[arg(long, default_value_t = LissajousConfig::default().amp_z, allow_negative_numbers = true, help = "Z-axis amplitude")]
    amp_z: f64,
    /// Number of points.
    #[arg(long, default_value_t = LissajousConfig::default().steps, help = "Number of points to generate")]
    steps: usize,
}

impl LissajousArgs {
    /// Map the flags onto a library configuration.
    fn into_config(self) -> LissajousConfig {
        let config = LissajousConfig {
            a: self.a,
            b: self.b,
            c: self.c,
            phase_x: self.phase_x,
            phase_y: self.phase_y,
            phase_z: self.phase_z,
            amp_x: self.amp_x,
            amp_y: self.amp_y,
            amp_z: self.amp_z,
            steps: self.steps,
        };
        match self.amp {
            Some(amp) => config.with_amplitude(amp),
            None => config,
        }
    }
}

/// Lorenz attractor parameters.
#[derive(Args, Debug)]
struct LorenzArgs {
    /// Number of points.
    #[arg(long, default_value_t = LorenzConfig::default().steps, help = "Number of points to generate")]
    steps: usize,
    /// Integration step.
    #[arg(long, default_value_t = LorenzConfig::default().dt, allow_negative_numbers = true, help = "Euler integration time step")]
    dt: f64,
}

impl LorenzArgs {
    /// Map the flags onto a library configuration.
    fn into_config(self) -> LorenzConfig {
        LorenzConfig {
            steps: self.steps,
            dt: self.dt,
        }
    }
}

/// Spiral sphere parameters.
#[derive(Args, Debug)]
struct SpiralSphereArgs {
    /// Number of points.
    #[arg(long, default_value_t = SpiralSphereConfig::default().steps, help = "Number of points to generate")]
    steps: usize,
    /// Sphere radius.
    #[arg(long, default_value_t = SpiralSphereConfig::default().radius, allow_negative_numbers = true, help = "Sphere radius")]
    radius: f64,
    /// Revolutions from pole to pole.
    #[arg(long, default_value_t = SpiralSphereConfig::default().turns, allow_negative_numbers = true, help = "Number of turns from pole to pole")]
    turns: f64,
}

impl SpiralSphereArgs {
    /// Map the flags onto a library configuration.
    fn into_config(self) -> SpiralSphereConfig {
        SpiralSphereConfig {
            steps: self.steps,
            radius: self.radius,
            turns: self.turns,
        }
    }
}

/// Torus knot parameters.
#[derive(Args, Debug)]
struct TorusKnotArgs {
    /// Winding number around the tube.
    #[arg(long, default_value_t = TorusKnotConfig::default().p, allow_negative_numbers = true, help = "Longitudinal winding number")]
    p: u32,
    /// Winding number around the axis.
    #[arg(long, default_value_t = TorusKnotConfig::default().q, allow_negative_numbers = true, help = "Meridional winding number")]
    q: u32,
    /// Major radius.
    #[arg(
        long = "major-radius",
        visible_alias = "R",
        default_value_t = TorusKnotConfig::default().major_radius,
        allow_negative_numbers = true,
        help = "Major radius, distance from centre to tube centre"
    )]
    major_radius: f64,
    /// Minor radius.
    #[arg(
        long = "minor-radius",
        visible_alias = "r",
        default_value_t = TorusKnotConfig::default().minor_radius,
        allow_negative_numbers = true,
        help = "Minor radius, tube thickness"
    )]
    minor_radius: f64,
    /// Number of points.
    #[arg(long, default_value_t = TorusKnotConfig::default().steps, help = "Number of points to generate")]
    steps: usize,
}

impl TorusKnotArgs {
    /// Map the flags onto a library configuration.
    fn into_config(self) -> TorusKnotConfig {
        TorusKnotConfig {
            p: self.p,
            q: self.q,
            major_radius: self.major_radius,
            minor_radius: self.minor_radius,
            steps: self.steps,
        }
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `pcurve` tool.
enum Commands {
    #[command(about = "Generate a 3D Lissajous curve")]
    /// Generate a 3D Lissajous curve.
    Lissajous {
        /// Curve parameters.
        #[command(flatten)]
        params: LissajousArgs,
        /// Output destination.
        #[command(flatten)]
        out: OutputArgs,
    },

    #[command(about = "Generate a Lorenz attractor trajectory")]
    /// Generate a Lorenz attractor trajectory.
    Lorenz {
        /// Integration parameters.
        #[command(flatten)]
        params: LorenzArgs,
        /// Output destination.
        #[command(flatten)]
        out: OutputArgs,
    },

    #[command(name = "spiral-sphere", about = "Generate a spiral wound around a sphere")]
    /// Generate a spiral wound around a sphere.
    SpiralSphere {
        /// Spiral parameters.
        #[command(flatten)]
        params: SpiralSphereArgs,
        /// Output destination.
        #[command(flatten)]
        out: OutputArgs,
    },

    #[command(name = "torus-knot", about = "Generate a (p,q) torus knot")]
    /// Generate a (p, q) torus knot.
    TorusKnot {
        /// Knot parameters.
        #[command(flatten)]
        params: TorusKnotArgs,
        /// Output destination.
        #[command(flatten)]
        out: OutputArgs,
    },

    #[command(about = "Summarise an existing point file")]
    /// Read a point file and print its size and extent.
    Inspect {
        #[arg(help = "Point file to read")]
        /// Input point file.
        input: PathBuf,
    },

    #[command(
        name = "list-curves",
        about = "List supported curve names and constraints"
    )]
    /// List supported curves and their constraints.
    ListCurves,
}

/// Exit with an error message if `result` failed.
fn report_ok<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Validate, generate and write one curve.
fn handle_generate(params: Result<CurveParams>, output: &Path) -> Result<()> {
    // Validation happens before anything is printed or written.
    let params = params?;
    for line in cmd::summary(&params) {
        println!("{line}");
    }
    let report = cmd::write_curve(&params, output)?;
    println!("Generated {} coordinates", report.count);
    println!("Saved to '{}'", output.display());
    if let Some(bounds) = report.bounds {
        println!("{}", cmd::describe_bounds(&bounds));
    }
    Ok(())
}

/// Build a validated torus knot, warning about self-intersecting tubes.
fn torus_knot(config: TorusKnotConfig) -> Result<CurveParams> {
    let knot = TorusKnot::new(config)?;
    if knot.self_intersects() {
        warn!(
            major_radius = config.major_radius,
            minor_radius = config.minor_radius,
            "minor radius is not smaller than major radius; the torus will self-intersect"
        );
    }
    Ok(knot.into())
}

/// Handle the `inspect` subcommand.
fn handle_inspect(input: &Path) -> Result<()> {
    let points = cmd::inspect(input)?;
    println!("File: {}", input.display());
    println!("Points: {}", points.len());
    if let Some(bounds) = points.bounds() {
        println!("{}", cmd::describe_bounds(&bounds));
    }
    Ok(())
}

/// Handle the `list-curves` subcommand.
fn handle_list_curves() {
    println!("Supported curves (key — display — constraints):");
    for entry in registry::REGISTRY {
        println!(
            "- {} — {} — {}",
            entry.key, entry.display, entry.constraints
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Lissajous { params, out } => report_ok(handle_generate(
            Lissajous::new(params.into_config())
                .map(CurveParams::from)
                .map_err(Into::into),
            &out.output,
        )),
        Commands::Lorenz { params, out } => report_ok(handle_generate(
            Lorenz::new(params.into_config())
                .map(CurveParams::from)
                .map_err(Into::into),
            &out.output,
        )),
        Commands::SpiralSphere { params, out } => report_ok(handle_generate(
            SpiralSphere::new(params.into_config())
                .map(CurveParams::from)
                .map_err(Into::into),
            &out.output,
        )),
        Commands::TorusKnot { params, out } => report_ok(handle_generate(
            torus_knot(params.into_config()),
            &out.output,
        )),
        Commands::Inspect { input } => report_ok(handle_inspect(&input)),
        Commands::ListCurves => handle_list_curves(),
    }
}
