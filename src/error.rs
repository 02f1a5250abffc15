//! Error types for langkit

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for langkit operations
pub type Result<T> = std::result::Result<T, LangError>;

/// Main error type for langkit
#[derive(Error, Debug)]
pub enum LangError {
    /// Project config errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Lang schema derivation errors
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// Lang model derivation errors
    #[error("{0}")]
    Model(#[from] ModelError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Project config (`.config.json`) errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file '{path}': {error}")]
    Invalid { path: PathBuf, error: String },

    #[error("Failed to lock config file '{path}': {error}")]
    Lock { path: PathBuf, error: String },
}

/// Template descriptor (`.template.json`) errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid template file '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    #[error("scope name cannot be empty")]
    EmptyScope,

    #[error("duplicate scope '{0}'")]
    DuplicateScope(String),

    #[error("empty type name in '{0}'")]
    EmptyType(String),

    #[error("duplicate type '{name}' in '{parent}'")]
    DuplicateType { parent: String, name: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Lang schema derivation errors
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("invalid lang file '{path}': {error}")]
    LangFile { path: PathBuf, error: String },

    #[error("invalid lang file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to write lang schema: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize lang schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lang model derivation errors
#[derive(Error, Debug)]
pub enum ModelError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("'{first}' and '{second}' both map to the model name '{name}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("entrypoint file not found: {0}")]
    EntrypointNotFound(PathBuf),

    #[error("entrypoint file is empty: {0}")]
    EntrypointEmpty(PathBuf),

    #[error("failed to write lang model: {0}")]
    Io(#[from] io::Error),
}

/// Specialized result type for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for template loading
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

/// Specialized result type for schema derivation
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Specialized result type for model derivation
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Whether an error came from one of the derivation collaborators
/// (reported as feedback instead of aborting the process)
pub fn is_collaborator_failure(err: &LangError) -> bool {
    matches!(err, LangError::Schema(_) | LangError::Model(_))
}
