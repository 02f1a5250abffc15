//! Command handlers
//!
//! Every handler takes a [`Context`] and works only inside its working
//! directory.

pub mod context;
pub mod default;
pub mod generate;
pub mod lang_file;
pub mod project;

// Re-export main types
pub use context::*;
pub use default::default;
pub use generate::{model, schema, Generated};
pub use lang_file::{create, delete, lang_file_path, LangFormat};
pub use project::{init, new};
