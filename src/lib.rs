//! Movie Provider Bot -- Setup Tool
//!
//! Bootstraps a Python Telegram bot project: checks the interpreter,
//! installs dependencies, lays down template files, initializes git,
//! and creates the working directories.

pub mod git;
pub mod report;
pub mod setup;
pub mod types;
