//! Render catalog cards.

use anyhow::{Context as _, Result};
use turbo_card::{render_cards, ViewNode};

use super::{resolve_now, RenderArgs};
use crate::catalog;
use crate::config::OutputFormat;
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let catalog_path = ctx.resolve_path(&args.catalog);
    let now = resolve_now(args.now.as_deref())?;
    let format = args.format.unwrap_or(ctx.config.render.format);

    ctx.output.debug(&format!("Reference time: {}", now.to_rfc3339()));

    let products = catalog::load(&catalog_path)?;
    if products.is_empty() {
        ctx.output.warn(&format!("Catalog is empty: {}", catalog_path.display()));
    }

    let cards = render_cards(&products, now);
    let rendered = serialize(&cards, format, ctx.config.render.pretty)?;

    match args.out {
        Some(ref out) => {
            let out_path = ctx.resolve_path(out);
            std::fs::write(&out_path, &rendered)
                .with_context(|| format!("Failed to write output: {}", out_path.display()))?;
            tracing::info!(path = %out_path.display(), cards = cards.len(), %format, "wrote cards");
            ctx.output.success(&format!(
                "Rendered {} card(s) to {}",
                cards.len(),
                out_path.display()
            ));
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Serialize rendered cards: HTML fragments one per line, or a JSON array of view trees.
pub fn serialize(cards: &[ViewNode], format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(cards
            .iter()
            .map(ViewNode::to_html)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(cards).context("Failed to serialize cards")
        }
        OutputFormat::Json => serde_json::to_string(cards).context("Failed to serialize cards"),
    }
}
