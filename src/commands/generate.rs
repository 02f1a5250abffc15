//! The `schema` and `model` commands
//!
//! Both hand the derivation to [`crate::generate`]. Derivation failures come
//! back as `LangError::Schema` / `LangError::Model` and are reported by the
//! dispatcher; other I/O failures propagate.

use crate::commands::Context;
use crate::config::templates::{
    LANG_SCHEMA_FILE, MODEL_FILE, TEMPLATE_SCHEMA, TEMPLATE_SCHEMA_FILE,
};
use crate::error::Result;
use crate::generate::{patch_entrypoint, write_lang_schema, write_model};
use std::fmt;
use std::fs;

/// Whether a derived file was new or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generated {
    Created,
    Updated,
}

impl Generated {
    fn from_existed(existed: bool) -> Self {
        if existed {
            Generated::Updated
        } else {
            Generated::Created
        }
    }
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generated::Created => write!(f, "created"),
            Generated::Updated => write!(f, "updated"),
        }
    }
}

/// Rewrite the template schema, then derive the lang schema
pub fn schema(ctx: &Context) -> Result<Generated> {
    let outcome = Generated::from_existed(ctx.path(LANG_SCHEMA_FILE).exists());

    let template_schema = ctx.path(TEMPLATE_SCHEMA_FILE);
    ctx.print_write(&template_schema);
    fs::write(&template_schema, TEMPLATE_SCHEMA)?;

    let written = write_lang_schema(&ctx.working_dir)?;
    ctx.print_write(&written);

    ctx.report(&format!(
        "schema for lang file {}. Now you can create or update your lang files.",
        outcome
    ));
    Ok(outcome)
}

/// Derive the lang model and make the entrypoint import it
pub fn model(ctx: &Context) -> Result<Generated> {
    let outcome = Generated::from_existed(ctx.path(MODEL_FILE).exists());

    let written = write_model(&ctx.working_dir)?;
    ctx.print_write(&written);
    if patch_entrypoint(&ctx.working_dir)? {
        ctx.print_debug("added model import to entrypoint");
    }

    ctx.report(&format!(
        "model for lang file {}. Now you can create or update your lang files.",
        outcome
    ));
    Ok(outcome)
}
