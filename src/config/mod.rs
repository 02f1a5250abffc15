//! Project configuration and fixed scaffolding contents
//!
//! This module handles the `.config.json` project config and holds the
//! static file templates written by the scaffolding commands.

pub mod parse;
pub mod templates;
pub mod types;

// Re-export main types
pub use parse::*;
pub use templates::*;
pub use types::*;
