//! The `default` command: show or set the default locale

use crate::commands::Context;
use crate::config::{config_path, read_config, update_config};
use crate::error::Result;

/// Show the default locale, or set it when a non-empty `locale` is given
///
/// A missing config file is reported, not treated as an error.
pub fn default(ctx: &Context, locale: Option<&str>) -> Result<()> {
    let path = config_path(&ctx.working_dir);
    if !path.exists() {
        ctx.report("config file not found");
        return Ok(());
    }

    match locale {
        Some(locale) if !locale.is_empty() => {
            ctx.print_write(&path);
            update_config(&path, |config| config.default = locale.to_string())?;
            ctx.report(&format!("default lang scope set to: {}", locale));
        }
        _ => {
            let config = read_config(&path)?;
            ctx.report(&format!("default lang scope: {}", config.default));
        }
    }

    Ok(())
}
