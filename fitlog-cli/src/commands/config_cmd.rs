use anyhow::Result;

use super::Context;
use crate::config::Config;

pub fn show_config(ctx: &Context) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        return Ok(());
    }

    let config_str = toml::to_string_pretty(&ctx.config)?;

    println!("Current Configuration ({})", ctx.config_path.display());
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let config_file = &ctx.config_path;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::default().save_to(config_file)?;

    println!("✓ Configuration initialized at: {}", config_file.display());

    Ok(())
}
