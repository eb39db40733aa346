//! Server-rendered catalog product cards for TurboCommerce.
//!
//! This crate provides:
//! - `ViewNode` / `Element` - A small view tree with HTML serialization
//! - `render` / `render_card` - Product card rendering per display variant
//! - `VariantStyle` - Styling lookup table keyed by `DisplayVariant`
//! - `tokens` - Design tokens (colors, font weights)
//! - `format_price` / `pluralize` - Text helpers used on cards

mod card;
mod format;
mod style;
pub mod tokens;
mod view;

pub use card::*;
pub use format::*;
pub use style::*;
pub use view::*;

// Re-export the domain types a caller needs to render a card
pub use turbo_commerce::display::DisplayVariant;
pub use turbo_commerce::Product;
