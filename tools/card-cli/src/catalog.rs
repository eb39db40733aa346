//! Catalog file loading.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use turbo_commerce::Product;

/// TOML catalogs use `[[products]]` tables.
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    products: Vec<Product>,
}

/// Load and validate a catalog file.
pub fn load(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    let products = parse(path, &content)?;
    validate(&products)?;

    tracing::info!(path = %path.display(), count = products.len(), "loaded catalog");
    Ok(products)
}

/// Parse catalog content, choosing the format from the file extension.
pub fn parse(path: &Path, content: &str) -> Result<Vec<Product>> {
    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        let catalog: TomlCatalog = toml::from_str(content)
            .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))?;
        Ok(catalog.products)
    } else {
        let root: Value = serde_json::from_str(content)
            .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))?;
        parse_json_entries(path, root)
    }
}

/// JSON catalogs are a bare array or wrapped in `{"products": [...]}`.
/// Entries are decoded one at a time so errors name the entry and field.
fn parse_json_entries(path: &Path, root: Value) -> Result<Vec<Product>> {
    let entries = match root {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("products") {
            Some(Value::Array(entries)) => entries,
            _ => bail!(
                "JSON catalog object must have a \"products\" array: {}",
                path.display()
            ),
        },
        _ => bail!(
            "JSON catalog must be an array or an object: {}",
            path.display()
        ),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let slug = entry
                .get("slug")
                .and_then(Value::as_str)
                .unwrap_or("?")
                .to_string();
            serde_json::from_value(entry).with_context(|| {
                format!(
                    "Invalid product at index {} ({}) in {}",
                    i,
                    slug,
                    path.display()
                )
            })
        })
        .collect()
}

/// Validate every product and reject duplicate slugs.
pub fn validate(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::new();

    for (i, product) in products.iter().enumerate() {
        product
            .validate()
            .with_context(|| format!("Invalid product at index {}", i))?;

        if !seen.insert(product.slug.as_str()) {
            bail!("Duplicate product slug: {}", product.slug);
        }
    }

    Ok(())
}
