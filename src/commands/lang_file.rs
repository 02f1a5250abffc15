//! Lang file commands: `create` and `delete`

use crate::commands::Context;
use crate::config::templates::{LANG_TEMPLATE_JSON, LANG_TEMPLATE_YAML};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// On-disk format of a lang file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangFormat {
    Json,
    Yaml,
}

impl LangFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            LangFormat::Json => "json",
            LangFormat::Yaml => "yaml",
        }
    }

    /// Initial contents referencing the lang schema
    pub fn template(self) -> &'static str {
        match self {
            LangFormat::Json => LANG_TEMPLATE_JSON,
            LangFormat::Yaml => LANG_TEMPLATE_YAML,
        }
    }
}

/// Path of the lang file `name` in the given format
pub fn lang_file_path(ctx: &Context, name: &str, format: LangFormat) -> PathBuf {
    ctx.path(format!("{}.{}", name, format.extension()))
}

/// Create (or overwrite) a lang file
pub fn create(ctx: &Context, name: &str, format: LangFormat) -> Result<()> {
    let lang_file = lang_file_path(ctx, name, format);
    ctx.print_write(&lang_file);
    fs::write(&lang_file, format.template())?;
    ctx.report(&format!("lang file created: {}", lang_file.display()));
    Ok(())
}

/// Delete the JSON lang file `name`
///
/// Only the `.json` form is targeted; YAML lang files are left alone.
pub fn delete(ctx: &Context, name: &str) -> Result<()> {
    let lang_file = lang_file_path(ctx, name, LangFormat::Json);

    if lang_file.exists() {
        ctx.print_debug(&format!("removing {}", lang_file.display()));
        fs::remove_file(&lang_file)?;
        ctx.report(&format!("lang file deleted: {}", lang_file.display()));
    } else {
        ctx.report(&format!("lang file not found: {}", lang_file.display()));
    }

    Ok(())
}
