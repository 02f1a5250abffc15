//! Project scaffolding: the `new` and `init` commands

use crate::commands::Context;
use crate::config::templates::{
    CONFIG_FILE, CONFIG_TEMPLATE, ENTRYPOINT_FILE, ENTRYPOINT_TEMPLATE, I18N_DIR,
    TEMPLATE_FILE, TEMPLATE_SCHEMA, TEMPLATE_SCHEMA_FILE, TEMPLATE_TEMPLATE,
};
use crate::error::Result;
use std::fs;

/// Create the `i18n` directory unless it already exists
pub fn new(ctx: &Context) -> Result<()> {
    let i18n_dir = ctx.path(I18N_DIR);
    if i18n_dir.exists() {
        ctx.report("i18n directory already exists");
        return Ok(());
    }

    fs::create_dir(&i18n_dir)?;
    ctx.report(&format!("i18n directory created: {}", i18n_dir.display()));
    Ok(())
}

/// Write the config, entrypoint, template and template schema files
///
/// Existing files are overwritten.
pub fn init(ctx: &Context) -> Result<()> {
    let config_file = ctx.path(CONFIG_FILE);
    let template_file = ctx.path(TEMPLATE_FILE);

    let files = [
        (config_file.clone(), CONFIG_TEMPLATE),
        (ctx.path(ENTRYPOINT_FILE), ENTRYPOINT_TEMPLATE),
        (template_file.clone(), TEMPLATE_TEMPLATE),
        (ctx.path(TEMPLATE_SCHEMA_FILE), TEMPLATE_SCHEMA),
    ];
    for (path, contents) in &files {
        ctx.print_write(path);
        fs::write(path, contents)?;
    }

    ctx.report(&format!(
        "files created:\n- {}\n- {}\n\nplease edit the files to fit your needs\n    ",
        config_file.display(),
        template_file.display()
    ));
    Ok(())
}
