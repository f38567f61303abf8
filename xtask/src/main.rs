//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Regenerate the sample point files under `samples/` with the CLI.
    Samples,
}

/// Locate the repository root relative to the `xtask` crate.
fn repo_root() -> Result<PathBuf> {
    let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Ok(xtask_dir
        .parent()
        .context("xtask crate must live at <repo>/xtask")?
        .to_path_buf())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = repo_root()?;
    let sh = Shell::new()?;
    sh.change_dir(&root);

    match cli.command {
        CommandName::Tidy => tidy(&sh, &root),
        CommandName::Test => test(&sh),
        CommandName::Samples => samples(&sh, &root),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(sh: &Shell, root: &Path) -> Result<()> {
    format_workspace(sh, root)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    format_workspace(sh, root)?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(sh: &Shell, root: &Path) -> Result<()> {
    let config = root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Write one default point file per curve into `samples/`.
fn samples(sh: &Shell, root: &Path) -> Result<()> {
    let dir = root.join("samples");
    sh.create_dir(&dir)?;
    for curve in ["lissajous", "lorenz", "spiral-sphere", "torus-knot"] {
        let out = dir.join(format!("{curve}.dat"));
        cmd!(sh, "cargo run -q --release -p pcurve -- {curve} -o {out}").run()?;
    }
    println!("Sample point files written to {}", dir.display());
    Ok(())
}
