//! Configuration management commands.

use anyhow::{bail, Result};
use clap::ValueEnum;
use turbo_observability::{LogFormat, LogLevel};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, OutputFormat, CONFIG_FILE_NAMES};
use crate::context::{find_config_file, Context};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    println!("[render]");
    ctx.output.kv("format", ctx.config.render.format.as_str());
    ctx.output.kv("pretty", &ctx.config.render.pretty.to_string());

    println!("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_directive());
    ctx.output.kv("format", log_format_str(ctx.config.logging.format));

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match ctx.config_path {
        Some(ref path) => path.to_string_lossy().to_string(),
        None => match find_config_file(&ctx.cwd) {
            Some(path) => path.to_string_lossy().to_string(),
            None => bail!("No config file found. Run `card config init` to create one."),
        },
    };

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    tracing::info!(%key, %value, path = %config_path, "updated config");
    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn log_format_str(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Json => "json",
        LogFormat::Human => "human",
    }
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["render", "format"] => Ok(config.render.format.as_str().to_string()),
        ["render", "pretty"] => Ok(config.render.pretty.to_string()),
        ["logging", "level"] => Ok(config.logging.level.as_directive().to_string()),
        ["logging", "format"] => Ok(log_format_str(config.logging.format).to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["render", "format"] => {
            config.render.format = match OutputFormat::from_str(value, true) {
                Ok(format) => format,
                Err(_) => bail!("Invalid render.format: {} (expected html or json)", value),
            }
        }
        ["render", "pretty"] => config.render.pretty = value.parse()?,
        ["logging", "level"] => {
            config.logging.level = match LogLevel::from_str(value) {
                Some(level) => level,
                None => bail!("Invalid logging.level: {}", value),
            }
        }
        ["logging", "format"] => {
            config.logging.format = match value.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "human" => LogFormat::Human,
                _ => bail!("Invalid logging.format: {} (expected human or json)", value),
            }
        }
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_value() {
        let config = CliConfig::default();
        assert_eq!(get_config_value(&config, "render.format").unwrap(), "html");
        assert_eq!(get_config_value(&config, "logging.level").unwrap(), "warn");
        assert!(get_config_value(&config, "render.width").is_err());
    }

    #[test]
    fn test_set_config_value() {
        let mut config = CliConfig::default();

        set_config_value(&mut config, "render.format", "JSON").unwrap();
        set_config_value(&mut config, "render.pretty", "false").unwrap();
        set_config_value(&mut config, "logging.level", "debug").unwrap();
        set_config_value(&mut config, "logging.format", "json").unwrap();

        assert_eq!(config.render.format, OutputFormat::Json);
        assert!(!config.render.pretty);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_set_config_value_rejects_bad_values() {
        let mut config = CliConfig::default();
        assert!(set_config_value(&mut config, "render.format", "xml").is_err());
        assert!(set_config_value(&mut config, "render.pretty", "maybe").is_err());
        assert!(set_config_value(&mut config, "logging.level", "loud").is_err());
        assert!(set_config_value(&mut config, "nope", "1").is_err());
        assert_eq!(config, CliConfig::default());
    }
}
