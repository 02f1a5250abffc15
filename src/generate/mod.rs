//! Derivation of the lang schema and lang model
//!
//! Both derivations read the template descriptor from the working directory;
//! they fail with typed errors that the `schema` and `model` commands report.

pub mod model;
pub mod schema;
pub mod template;

// Re-export main entry points
pub use model::{patch_entrypoint, render_model, write_model};
pub use schema::{build_lang_schema, find_lang_files, write_lang_schema};
pub use template::{load_template, ItemType, Scope, Subtype, Template};
