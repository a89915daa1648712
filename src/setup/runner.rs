//! Setup Runner
//!
//! The orchestrator: runs every setup step in a fixed order, prints
//! colored progress, and writes the run report at the end.
//!
//! Failure semantics: an old or missing interpreter, missing
//! prerequisite files, or a pip failure abort the run before any file
//! is created. Everything after the install step is idempotent, and
//! git trouble only warns.

use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;
use tracing::warn;

use crate::git::{self, GitOutcome};
use crate::report::{save_report, SetupReport};
use crate::types::{StepOutcome, StepRecord};

use super::banner::show_banner;
use super::dependencies::{install_dependencies, MANIFEST};
use super::environment::{check_python, missing_prerequisites};
use super::redact::{write_config_example, CONFIG_FILE, EXAMPLE_FILE};
use super::templates::{create_work_dirs, write_env_file, WORK_DIRS};

/// Run the whole setup sequence in `root`.
pub async fn run_setup(root: &Path) -> Result<()> {
    show_banner();

    let mut steps: Vec<StepRecord> = Vec::new();

    // ---- 1. Python version --------------------------------------------------
    println!("{}", "  [1/7] Checking Python version...".cyan());

    let interpreter = check_python()?;
    println!(
        "{}",
        format!(
            "  Python {} ({})\n",
            interpreter.version, interpreter.binary
        )
        .green()
    );
    steps.push(StepRecord::new(
        "python-check",
        StepOutcome::Done,
        format!("{} {}", interpreter.binary, interpreter.version),
    ));

    // ---- 2. Prerequisite files ----------------------------------------------
    println!("{}", "  [2/7] Checking project files...".cyan());

    let missing = missing_prerequisites(root);
    if !missing.is_empty() {
        for name in &missing {
            eprintln!("{}", format!("  {} not found", name).red());
        }
        bail!("Missing prerequisite files: {}", missing.join(", "));
    }
    println!("{}", "  All project files present\n".green());
    steps.push(StepRecord::new(
        "prerequisites",
        StepOutcome::Done,
        "info.py, bot.py, requirements.txt",
    ));

    // ---- 3. Dependencies ----------------------------------------------------
    println!("{}", "  [3/7] Installing dependencies...".cyan());

    install_dependencies(root, &interpreter)?;
    println!("{}", "  Dependencies installed\n".green());
    steps.push(StepRecord::new(
        "dependencies",
        StepOutcome::Done,
        format!("pip install -r {}", MANIFEST),
    ));

    // ---- 4. Environment template --------------------------------------------
    println!("{}", "  [4/7] Environment template...".cyan());

    let outcome = write_env_file(root)?;
    match outcome {
        StepOutcome::Done => println!("{}", "  .env template written\n".green()),
        _ => println!("{}", "  .env already exists, leaving it alone\n".dimmed()),
    }
    steps.push(StepRecord::new("env-template", outcome, ".env"));

    // ---- 5. Config example --------------------------------------------------
    println!("{}", "  [5/7] Config example...".cyan());

    let outcome = write_config_example(root)?;
    match outcome {
        StepOutcome::Done => {
            println!(
                "{}",
                format!("  {} written (secrets redacted)\n", EXAMPLE_FILE).green()
            )
        }
        _ => println!(
            "{}",
            format!("  {} already exists, leaving it alone\n", EXAMPLE_FILE).dimmed()
        ),
    }
    steps.push(StepRecord::new(
        "config-example",
        outcome,
        format!("{} -> {}", CONFIG_FILE, EXAMPLE_FILE),
    ));

    // ---- 6. Git repository --------------------------------------------------
    println!("{}", "  [6/7] Git repository...".cyan());

    let record = match git::init_repository(root) {
        GitOutcome::Initialized => {
            println!(
                "{}",
                format!("  Repository initialized ({})\n", git::head_summary(root)).green()
            );
            StepRecord::new("git-init", StepOutcome::Done, "initial commit made")
        }
        GitOutcome::AlreadyInitialized => {
            println!("{}", "  Repository already exists\n".dimmed());
            StepRecord::new("git-init", StepOutcome::Skipped, ".git already present")
        }
        GitOutcome::Unavailable(reason) => {
            warn!(%reason, "git unavailable");
            println!(
                "{}",
                "  Git failed or is not installed; continuing without version control\n".yellow()
            );
            StepRecord::new("git-init", StepOutcome::Warned, reason)
        }
    };
    steps.push(record);

    // ---- 7. Working directories ---------------------------------------------
    println!("{}", "  [7/7] Working directories...".cyan());

    create_work_dirs(root)?;
    println!(
        "{}",
        format!("  Created: {}\n", WORK_DIRS.join(", ")).green()
    );
    steps.push(StepRecord::new(
        "work-dirs",
        StepOutcome::Done,
        WORK_DIRS.join(", "),
    ));

    // The report lands in logs/, which the directory step guarantees.
    let report = SetupReport::new(interpreter.version.to_string(), steps);
    if let Err(e) = save_report(root, &report) {
        warn!(error = %format!("{:#}", e), "could not write setup report");
        println!("{}", "  Could not write logs/setup-report.json\n".yellow());
    }

    show_next_steps();
    Ok(())
}

/// Static guidance printed after a successful run.
fn show_next_steps() {
    println!("{}", "  Setup completed successfully!\n".green());
    println!(
        "{}",
        r#"  Next steps:

  1. Configure your bot:
     - Edit info.py with your actual credentials
     - Or use the .env file for environment variables

  2. Run the bot:
     python bot.py

  3. Deploy to cloud:
     - Heroku: follow DEPLOYMENT.md
     - Railway: connect the GitHub repository
     - VPS: run this setup tool on the server

  4. Documentation:
     - README.md: complete documentation
     - DEPLOYMENT.md: deployment guide

  5. Development:
     - Add features in the plugins/ directory
     - Test thoroughly before deploying

  Need help?
  - Check logs in the logs/ directory
  - Read the documentation
  - Open GitHub issues
"#
        .white()
    );
}
