//! Card CLI - Command line tool for rendering catalog product cards.
//!
//! Commands:
//! - `card render` - Render every product in a catalog file to HTML or JSON
//! - `card classify` - List the display variant of every product
//! - `card config` - Manage configuration

mod catalog;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ClassifyArgs, ConfigArgs, RenderArgs};

/// Card CLI - Render and inspect TurboCommerce catalog cards
#[derive(Parser)]
#[command(name = "card")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render product cards from a catalog file
    Render(RenderArgs),

    /// Show the display variant of each product
    Classify(ClassifyArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let log_config = if cli.verbose {
        ctx.config.logging.verbose()
    } else {
        ctx.config.logging
    };
    turbo_observability::init(&log_config);

    // Execute command
    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Classify(args) => commands::classify::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
