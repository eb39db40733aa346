//! CLI command implementations.

pub mod classify;
pub mod config;
pub mod render;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use crate::config::OutputFormat;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog file (.json or .toml).
    pub catalog: String,

    /// Reference time for classification (RFC 3339). Defaults to now.
    #[arg(long)]
    pub now: Option<String>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Catalog file (.json or .toml).
    pub catalog: String,

    /// Reference time for classification (RFC 3339). Defaults to now.
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Resolve the reference time once per command so every card sees the same instant.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid --now timestamp (expected RFC 3339): {}", s)),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_resolve_now_parses_offsets() {
        let now = resolve_now(Some("2024-06-01T14:00:00+02:00")).unwrap();
        assert_eq!(now, Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_resolve_now_rejects_garbage() {
        let err = resolve_now(Some("yesterday")).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
