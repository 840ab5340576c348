//! Configuration commands.

use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::CliConfig;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let storefront = &ctx.config.storefront;
    ctx.output.kv("catalog", ctx.config.catalog.as_deref().unwrap_or("(built-in)"));
    ctx.output.kv("currency", storefront.currency.code());
    ctx.output.kv(
        "shipping.free_threshold",
        &storefront.shipping.free_threshold.to_string(),
    );
    ctx.output.kv("shipping.flat_rate", &storefront.shipping.flat_rate.to_string());
    ctx.output.kv("timers.add_delay_ms", &storefront.timers.add_delay_ms.to_string());
    ctx.output.kv(
        "timers.confirm_delay_ms",
        &storefront.timers.confirm_delay_ms.to_string(),
    );
    ctx.output.kv(
        "timers.story_interval_ms",
        &storefront.timers.story_interval_ms.to_string(),
    );
    ctx.output.kv("featured.default_size", &storefront.featured.default_size);

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let target = ctx.resolve_path(path);

    if target.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    let target = path_str(&target)?;
    CliConfig::default().save(target)?;
    ctx.output.success(&format!("Created {}", target));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        ctx.output.info("No config file found; defaults are valid.");
        return Ok(());
    };

    CliConfig::load(path_str(path)?)?;
    ctx.output.success(&format!("{} is valid", path.display()));

    Ok(())
}

fn path_str(path: &Path) -> Result<&str> {
    match path.to_str() {
        Some(s) => Ok(s),
        None => bail!("Path is not valid UTF-8: {}", path.display()),
    }
}
