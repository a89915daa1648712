//! Shared Types
//!
//! Types used across the setup steps: the parsed Python interpreter
//! version and the per-step records collected for the run report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum Python version the bot project supports.
pub const MIN_PYTHON: PythonVersion = PythonVersion {
    major: 3,
    minor: 8,
    patch: 0,
};

/// A parsed Python interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    /// Parse a version out of `python --version` output, e.g.
    /// `"Python 3.8.10"`. Returns `None` when no `Python X.Y[.Z]`
    /// token is present.
    pub fn parse(output: &str) -> Option<Self> {
        let rest = output.trim().strip_prefix("Python")?.trim();
        let mut parts = rest.split_whitespace().next()?.split('.');

        let major: u32 = parts.next()?.parse().ok()?;
        let minor: u32 = parts.next()?.parse().ok()?;
        // Patch may be absent or carry a suffix like "0b1" -- take leading digits.
        let patch = parts
            .next()
            .map(|p| {
                let digits: String = p.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().unwrap_or(0)
            })
            .unwrap_or(0);

        Some(PythonVersion {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// How a single setup step finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOutcome {
    /// The step ran and did its work.
    Done,
    /// The step's target already existed; nothing was touched.
    Skipped,
    /// The step failed non-fatally and the run continued.
    Warned,
}

/// One entry in the run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub name: String,
    pub outcome: StepOutcome,
    pub detail: String,
    pub finished_at: String,
}

impl StepRecord {
    pub fn new(name: &str, outcome: StepOutcome, detail: impl Into<String>) -> Self {
        StepRecord {
            name: name.to_string(),
            outcome,
            detail: detail.into(),
            finished_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
