//! Environment Checks
//!
//! Find a usable Python interpreter and verify the project's
//! prerequisite files are in place. Both checks run before anything
//! is written to disk.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::types::{PythonVersion, MIN_PYTHON};

/// Interpreter names probed, in order.
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Files the project must already contain before setup may proceed.
pub const PREREQUISITE_FILES: &[&str] = &["info.py", "bot.py", "requirements.txt"];

/// A Python interpreter found on PATH, with its parsed version.
#[derive(Debug, Clone)]
pub struct Interpreter {
    /// The binary name to invoke (e.g. `python3`).
    pub binary: String,
    pub version: PythonVersion,
}

/// Ask `binary --version` and parse the answer.
///
/// Python 2 printed the version on stderr, Python 3 prints it on
/// stdout; both streams are consulted.
fn probe_interpreter(binary: &str) -> Option<Interpreter> {
    let output = Command::new(binary).arg("--version").output().ok()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let version = PythonVersion::parse(&stdout).or_else(|| PythonVersion::parse(&stderr))?;

    debug!(binary, %version, "probed interpreter");
    Some(Interpreter {
        binary: binary.to_string(),
        version,
    })
}

/// Find a Python interpreter and verify it meets [`MIN_PYTHON`].
///
/// Fatal when no candidate is on PATH or the best one is too old.
pub fn check_python() -> Result<Interpreter> {
    let interpreter = PYTHON_CANDIDATES
        .iter()
        .find_map(|binary| probe_interpreter(binary))
        .context("No Python interpreter found on PATH (tried python3, python)")?;

    require_min_version(&interpreter)?;
    Ok(interpreter)
}

/// Verify the interpreter meets the minimum supported version.
pub fn require_min_version(interpreter: &Interpreter) -> Result<()> {
    if interpreter.version < MIN_PYTHON {
        bail!(
            "Python {}.{}+ is required, found {} ({})",
            MIN_PYTHON.major,
            MIN_PYTHON.minor,
            interpreter.version,
            interpreter.binary
        );
    }
    Ok(())
}

/// Check that every prerequisite file exists under `root`.
///
/// Returns the list of missing file names so the caller can report
/// all of them at once, not just the first.
pub fn missing_prerequisites(root: &Path) -> Vec<&'static str> {
    PREREQUISITE_FILES
        .iter()
        .filter(|name| !root.join(name).exists())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_require_min_version_rejects_old() {
        let interpreter = Interpreter {
            binary: "python3".to_string(),
            version: PythonVersion::parse("Python 3.7.3").unwrap(),
        };
        let err = require_min_version(&interpreter).unwrap_err();
        assert!(err.to_string().contains("3.8+"));
    }

    #[test]
    fn test_require_min_version_accepts_new() {
        let interpreter = Interpreter {
            binary: "python3".to_string(),
            version: PythonVersion::parse("Python 3.12.0").unwrap(),
        };
        assert!(require_min_version(&interpreter).is_ok());
    }

    #[test]
    fn test_missing_prerequisites_reports_all() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bot.py"), "# entry point").unwrap();

        let missing = missing_prerequisites(dir.path());
        assert_eq!(missing, vec!["info.py", "requirements.txt"]);
    }

    #[test]
    fn test_missing_prerequisites_empty_when_present() {
        let dir = tempfile::tempdir().unwrap();
        for name in PREREQUISITE_FILES {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        assert!(missing_prerequisites(dir.path()).is_empty());
    }
}
