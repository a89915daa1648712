//! Secret Redaction
//!
//! Derives `info.py.example` from the real `info.py` by replacing
//! credentials with placeholders. Redaction is pattern-based rather
//! than tied to one deployment's literal values: it covers Telegram
//! bot tokens, 32-hex API hashes, and the numeric API id assignment.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::types::StepOutcome;

/// The config file secrets are read from.
pub const CONFIG_FILE: &str = "info.py";

/// The sanitized copy written next to it.
pub const EXAMPLE_FILE: &str = "info.py.example";

/// Replace known secret shapes in `content` with placeholders.
///
/// Quoted values keep their quotes; only the secret itself is swapped.
pub fn redact_secrets(content: &str) -> Result<String> {
    // Telegram bot token: numeric bot id, a colon, then a 30-40 char
    // secret suffix.
    let bot_token = Regex::new(r"\b\d{6,12}:[A-Za-z0-9_-]{30,40}\b")?;
    // Telegram API hash: a bare 32-character lowercase hex literal.
    let api_hash = Regex::new(r"\b[0-9a-f]{32}\b")?;
    // Numeric API id assignment, e.g. `API_ID = 27507157`.
    let api_id = Regex::new(r"(?m)^(\s*API_ID\s*=\s*)\d+")?;

    let content = bot_token.replace_all(content, "your_bot_token_here");
    let content = api_hash.replace_all(&content, "your_api_hash_here");
    let content = api_id.replace_all(&content, "${1}your_api_id_here");

    Ok(content.into_owned())
}

/// Generate the sanitized config example, unless it already exists.
///
/// Skipping when the example is present also guards against double
/// substitution on re-runs.
pub fn write_config_example(root: &Path) -> Result<StepOutcome> {
    let example_path = root.join(EXAMPLE_FILE);
    if example_path.exists() {
        return Ok(StepOutcome::Skipped);
    }

    let source = fs::read_to_string(root.join(CONFIG_FILE))
        .with_context(|| format!("Failed to read {}", CONFIG_FILE))?;
    let sanitized = redact_secrets(&source)?;

    fs::write(&example_path, sanitized)
        .with_context(|| format!("Failed to write {}", EXAMPLE_FILE))?;
    Ok(StepOutcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"import os

BOT_TOKEN = "8342816692:AAE9hsbZ7DU3tcCko08rXJWior0m9ruWlF4"
API_ID = 27507157
API_HASH = "8c1121dfa9159420a3c9276a1dc00c53"
DATABASE_NAME = "filmadda"
"#;

    #[test]
    fn test_redacts_bot_token_keeping_quotes() {
        let out = redact_secrets(SAMPLE).unwrap();
        assert!(!out.contains("8342816692:AAE9hsbZ7DU3tcCko08rXJWior0m9ruWlF4"));
        assert!(out.contains("BOT_TOKEN = \"your_bot_token_here\""));
    }

    #[test]
    fn test_redacts_api_hash_and_id() {
        let out = redact_secrets(SAMPLE).unwrap();
        assert!(!out.contains("8c1121dfa9159420a3c9276a1dc00c53"));
        assert!(!out.contains("27507157"));
        assert!(out.contains("API_HASH = \"your_api_hash_here\""));
        assert!(out.contains("API_ID = your_api_id_here"));
    }

    #[test]
    fn test_redaction_is_not_literal_bound() {
        // A different deployment's credentials are caught by shape.
        let other = "TOKEN = \"123456789:AbCdEfGhIjKlMnOpQrStUvWxYz0123456789\"\n\
                     HASH = \"0123456789abcdef0123456789abcdef\"\n";
        let out = redact_secrets(other).unwrap();
        assert!(out.contains("your_bot_token_here"));
        assert!(out.contains("your_api_hash_here"));
    }

    #[test]
    fn test_non_secrets_survive() {
        let out = redact_secrets(SAMPLE).unwrap();
        assert!(out.contains("import os"));
        assert!(out.contains("DATABASE_NAME = \"filmadda\""));
    }

    #[test]
    fn test_example_written_and_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), SAMPLE).unwrap();

        assert_eq!(write_config_example(dir.path()).unwrap(), StepOutcome::Done);

        let example = fs::read_to_string(dir.path().join(EXAMPLE_FILE)).unwrap();
        assert!(!example.contains("8342816692"));
        assert!(!example.contains("8c1121dfa9159420a3c9276a1dc00c53"));
    }

    #[test]
    fn test_existing_example_untouched() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), SAMPLE).unwrap();
        fs::write(dir.path().join(EXAMPLE_FILE), "# hand-edited\n").unwrap();

        assert_eq!(
            write_config_example(dir.path()).unwrap(),
            StepOutcome::Skipped
        );
        assert_eq!(
            fs::read_to_string(dir.path().join(EXAMPLE_FILE)).unwrap(),
            "# hand-edited\n"
        );
    }
}
