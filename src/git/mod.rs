//! Git Bootstrap
//!
//! Initializes a git repository for the bot project and makes the
//! initial commit. Git being absent or failing is never fatal to
//! setup; the caller records it as a warning and moves on.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

/// Commit message for the initial commit.
const INITIAL_COMMIT_MESSAGE: &str = "Initial commit: Movie Provider Bot";

/// Outcome of the repository-init step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOutcome {
    /// Repository created and initial commit made.
    Initialized,
    /// A `.git` marker already exists; nothing was done.
    AlreadyInitialized,
    /// Git is missing or a git command failed. Carries the reason.
    Unavailable(String),
}

/// Run a git command in `root` and return its trimmed stdout.
fn git(root: &Path, args: &[&str]) -> Result<String> {
    debug!(?args, "running git");
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {} failed: {}", args.join(" "), stderr.trim());
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(stdout)
}

/// Initialize a repository in `root` and commit everything, unless a
/// `.git` marker is already present.
///
/// All failures (binary not on PATH, init/add/commit errors) collapse
/// into `GitOutcome::Unavailable` -- version control is optional for
/// the bot project.
pub fn init_repository(root: &Path) -> GitOutcome {
    init_repository_with(root, "git")
}

/// Same as [`init_repository`] but with an explicit binary name, so the
/// missing-binary path can be exercised in tests.
pub fn init_repository_with(root: &Path, binary: &str) -> GitOutcome {
    if root.join(".git").exists() {
        return GitOutcome::AlreadyInitialized;
    }

    let run = |args: &[&str]| -> Result<()> {
        let output = Command::new(binary)
            .args(args)
            .current_dir(root)
            .output()
            .with_context(|| format!("Failed to execute {} {}", binary, args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{} {} failed: {}", binary, args.join(" "), stderr.trim());
        }
        Ok(())
    };

    let result = run(&["init"])
        .and_then(|_| run(&["add", "."]))
        .and_then(|_| run(&["commit", "-m", INITIAL_COMMIT_MESSAGE]));

    match result {
        Ok(()) => GitOutcome::Initialized,
        Err(e) => GitOutcome::Unavailable(format!("{:#}", e)),
    }
}

/// Short description of the repository HEAD, for the run report.
/// Best-effort; returns "unknown" when git cannot answer.
pub fn head_summary(root: &Path) -> String {
    git(root, &["log", "-1", "--pretty=%h %s"]).unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_unavailable_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = init_repository_with(dir.path(), "definitely-not-a-git-binary");
        match outcome {
            GitOutcome::Unavailable(reason) => {
                assert!(reason.contains("Failed to execute"));
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_existing_marker_skips() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let outcome = init_repository_with(dir.path(), "definitely-not-a-git-binary");
        assert_eq!(outcome, GitOutcome::AlreadyInitialized);
    }
}
