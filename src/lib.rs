//! Langkit - scaffolding for file-based i18n lang projects
//!
//! Langkit bootstraps and maintains a directory of lang files (JSON/YAML) together
//! with the project config, the template descriptor, and the lang schema and lang
//! model derived from that template.

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generate;

// Re-export commonly used types
pub use error::{LangError, Result};

/// Current version of langkit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
