//! Dependency Installation
//!
//! Installs the bot project's Python dependencies with pip, using the
//! interpreter the environment check already validated.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::setup::environment::Interpreter;

/// The dependency manifest consumed by pip.
pub const MANIFEST: &str = "requirements.txt";

/// Run `python -m pip install -r requirements.txt` in `root`.
///
/// A non-zero pip exit is fatal to the whole setup run.
pub fn install_dependencies(root: &Path, interpreter: &Interpreter) -> Result<()> {
    debug!(binary = %interpreter.binary, "installing dependencies");

    let output = Command::new(&interpreter.binary)
        .args(["-m", "pip", "install", "-r", MANIFEST])
        .current_dir(root)
        .output()
        .context("Failed to execute pip")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("pip install failed: {}", stderr.trim());
    }

    Ok(())
}
