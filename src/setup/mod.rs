//! Setup Module
//!
//! The sequential setup routine for the bot project: banner display,
//! environment checks, dependency installation, file templating, and
//! the step orchestrator.

pub mod banner;
pub mod dependencies;
pub mod environment;
pub mod redact;
pub mod runner;
pub mod templates;
