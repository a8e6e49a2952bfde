//! ischema CLI: compile marked interfaces into JSON Schema files.
//!
//! `ischema [ROOT]` reads `ROOT/ischema.json` (defaults apply when absent) and
//! writes one `<title>.json` per `/* SCHEMA */` block. `ischema --init [ROOT]`
//! writes a starter config instead.
//!
//! Logging: set `RUST_LOG=ischema=debug` (or `warn`, `info`) to tune logs on stderr.

mod cli;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::run::{project_root, run_generate, run_init};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "ischema=debug"
        } else {
            "ischema=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let root = project_root(cli.root)?;

    if cli.init {
        let path = run_init(&root)?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let report = run_generate(&root, cli.index_encoding.map(Into::into)).await?;
    println!(
        "Compiled {} schema(s) from {} file(s)",
        report.schemas_written.len(),
        report.files_scanned
    );
    Ok(())
}
