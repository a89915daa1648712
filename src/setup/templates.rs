//! Templates
//!
//! Fixed-content files and directories the setup run lays down:
//! the `.env` template and the working directories. All writes are
//! conditional -- an existing target is never overwritten.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::StepOutcome;

/// The `.env` template written on first run.
pub const ENV_TEMPLATE: &str = r#"# Movie Provider Bot Configuration
# Copy this file and fill in your actual values

# Bot Configuration
BOT_TOKEN=your_bot_token_here
API_ID=your_api_id_here
API_HASH=your_api_hash_here

# Database Configuration
DATABASE_URI=your_mongodb_uri_here
DATABASE_NAME=filmadda

# Admin Configuration
ADMINS=your_admin_id_here
CHANNELS=your_channel_id_here

# Index Channel Configuration
INDEX_REQ_CHANNEL=your_index_channel_id_here
FILE_STORE_CHANNEL=your_file_store_channel_id_here
LOG_CHANNEL=your_log_channel_id_here

# Optional Configuration
SHORTLINK_URL=arlinks.in
SHORTLINK_API=your_shortlink_api_here
STREAM_SITE=papajiurl.com
STREAM_API=your_stream_api_here

# Images
PICS=https://telegra.ph/file/2e14c61c67f0ab9951b89.jpg
"#;

/// Working directories created for the bot project.
pub const WORK_DIRS: &[&str] = &["logs", "temp", "backup"];

/// Write the `.env` template unless one already exists.
pub fn write_env_file(root: &Path) -> Result<StepOutcome> {
    let path = root.join(".env");
    if path.exists() {
        return Ok(StepOutcome::Skipped);
    }

    fs::write(&path, ENV_TEMPLATE).context("Failed to write .env template")?;
    Ok(StepOutcome::Done)
}

/// Create the working directories. Existing directories are left alone.
pub fn create_work_dirs(root: &Path) -> Result<()> {
    for dir in WORK_DIRS {
        fs::create_dir_all(root.join(dir))
            .with_context(|| format!("Failed to create {} directory", dir))?;
    }
    Ok(())
}
