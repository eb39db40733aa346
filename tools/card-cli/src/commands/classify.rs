//! List display variants for a catalog.

use anyhow::Result;
use serde::Serialize;
use turbo_commerce::display::DisplayVariant;

use super::{resolve_now, ClassifyArgs};
use crate::catalog;
use crate::context::Context;
use crate::output::variant_badge;

#[derive(Debug, Serialize)]
struct Classification<'a> {
    slug: &'a str,
    name: &'a str,
    variant: DisplayVariant,
}

/// Run the classify command.
pub async fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let catalog_path = ctx.resolve_path(&args.catalog);
    let now = resolve_now(args.now.as_deref())?;
    let products = catalog::load(&catalog_path)?;

    let rows: Vec<Classification<'_>> = products
        .iter()
        .map(|p| Classification {
            slug: &p.slug,
            name: &p.name,
            variant: p.display_variant(now),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("Display variants at {}", now.to_rfc3339()));

    let slug_width = rows.iter().map(|r| r.slug.len()).max().unwrap_or(4).max(4);
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(4).max(4);
    let widths = [slug_width, name_width, 0];

    ctx.output.table_row(&["SLUG", "NAME", "VARIANT"], &widths);
    for row in &rows {
        let badge = variant_badge(row.variant);
        ctx.output.table_row(&[row.slug, row.name, badge.as_str()], &widths);
    }

    let flagged = rows.iter().filter(|r| r.variant.is_flagged()).count();
    ctx.output.info(&format!("{} of {} product(s) flagged", flagged, rows.len()));

    Ok(())
}
