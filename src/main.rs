//! Setup Tool Entry Point
//!
//! Parses the (flagless) CLI surface, initializes tracing, and runs
//! the setup sequence in the current directory. Exit code 0 on
//! success, 1 on any fatal failure.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const VERSION: &str = "0.1.0";

/// Movie Provider Bot -- Setup Tool
#[derive(Parser, Debug)]
#[command(
    name = "moviebot-setup",
    version = VERSION,
    about = "Movie Provider Bot -- Setup Tool",
    long_about = "Sets up the Movie Provider Bot project in the current directory: \
                  checks Python, installs dependencies, writes templates, and \
                  initializes version control."
)]
struct Cli {
    // Execution is parameterless; only --help and --version exist.
}

/// Diagnostics go through tracing; RUST_LOG controls the level,
/// defaulting to warnings only so step output stays readable.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    moviebot_setup::setup::runner::run_setup(Path::new(".")).await
}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Fatal: {:#}", e);
        eprintln!("Setup failed. Please fix the issues above.");
        std::process::exit(1);
    }
}
