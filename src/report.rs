//! Run Report
//!
//! Persists a machine-readable summary of a setup run to
//! `logs/setup-report.json`. The logs directory is guaranteed by the
//! directory step, which always runs before the report is written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::StepRecord;

/// Report file path relative to the project root.
const REPORT_PATH: &str = "logs/setup-report.json";

/// Summary of one setup run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupReport {
    pub tool_version: String,
    pub python: String,
    pub finished_at: String,
    pub steps: Vec<StepRecord>,
}

impl SetupReport {
    pub fn new(python: String, steps: Vec<StepRecord>) -> Self {
        SetupReport {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            python,
            finished_at: chrono::Utc::now().to_rfc3339(),
            steps,
        }
    }
}

/// Returns the report path under `root`.
pub fn report_path(root: &Path) -> PathBuf {
    root.join(REPORT_PATH)
}

/// Write the report as pretty JSON. Overwrites any previous report --
/// each run describes itself, not history.
pub fn save_report(root: &Path, report: &SetupReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    let path = report_path(root);
    fs::write(&path, json).context("Failed to write setup report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StepOutcome, StepRecord};

    #[test]
    fn test_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("logs")).unwrap();

        let steps = vec![
            StepRecord::new("python-check", StepOutcome::Done, "Python 3.11.2"),
            StepRecord::new("env-template", StepOutcome::Skipped, ".env already exists"),
            StepRecord::new("git-init", StepOutcome::Warned, "git not found"),
        ];
        let report = SetupReport::new("3.11.2".to_string(), steps);
        save_report(dir.path(), &report).unwrap();

        let raw = fs::read_to_string(report_path(dir.path())).unwrap();
        let parsed: SetupReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.steps.len(), 3);
        assert_eq!(parsed.python, "3.11.2");
        assert_eq!(parsed.steps[1].outcome, StepOutcome::Skipped);
    }

    #[test]
    fn test_report_fails_without_logs_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = SetupReport::new("3.8.0".to_string(), Vec::new());
        assert!(save_report(dir.path(), &report).is_err());
    }
}
