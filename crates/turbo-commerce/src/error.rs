//! Commerce error types.

use thiserror::Error;

/// Errors raised while accepting catalog data.
///
/// Classification and rendering never fail; these errors belong to the
/// boundary where products enter the system.
#[derive(Error, Debug, PartialEq)]
pub enum CommerceError {
    /// Price below zero.
    #[error("Invalid price for {slug}: {amount_cents} cents")]
    InvalidPrice { slug: String, amount_cents: i64 },

    /// Sale price below zero.
    #[error("Invalid sale price for {slug}: {amount_cents} cents")]
    InvalidSalePrice { slug: String, amount_cents: i64 },

    /// Missing or blank slug.
    #[error("Product slug must not be empty")]
    EmptySlug,

    /// Missing or blank display name.
    #[error("Product name must not be empty: {0}")]
    EmptyName(String),
}
