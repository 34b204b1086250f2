/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! IronSpec command-line interface.
//!
//! Compiles a FIX specification XML document into the three declaration
//! artifacts the downstream codec consumes, written to the current
//! directory:
//!
//! ```bash
//! ironspec FIX42.xml
//! # -> FIX.4.2.header.txt, FIX.4.2.messages.txt, FIX.4.2.tags.txt
//! ```

use anyhow::Context;
use clap::Parser;
use ironspec_codegen::{Artifacts, generate_from_file};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "ironspec")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile a FIX specification XML into codec declaration artifacts")]
struct Cli {
    /// Path to the FIX specification XML file.
    spec: PathBuf,
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Writes the three artifacts into `dir`, logging one progress line each.
fn write_artifacts(dir: &Path, artifacts: &Artifacts) -> anyhow::Result<()> {
    for (kind, file_name, contents) in artifacts.outputs() {
        let path = dir.join(&file_name);
        info!("Writing {} to {}", kind, path.display());
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    info!("Parsing FIX specification {}", cli.spec.display());
    let artifacts = generate_from_file(&cli.spec)
        .with_context(|| format!("failed to compile specification {}", cli.spec.display()))?;

    write_artifacts(Path::new("."), &artifacts)
}
