//! E-commerce domain types for TurboCommerce storefront cards.
//!
//! This crate provides the types a catalog listing needs before anything is
//! rendered:
//!
//! - **Money**: cents-based amounts with currency formatting
//! - **Catalog**: the listing `Product` and its upstream validation
//! - **Display**: the `DisplayVariant` classifier (on-sale, new-release, default)
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use turbo_commerce::prelude::*;
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
//! let product = Product::new("air-glide", "Air Glide", "/shoes/air-glide.jpg", 16500)
//!     .with_release_date(now - Duration::days(10))
//!     .with_colors(3);
//!
//! assert_eq!(product.display_variant(now), DisplayVariant::NewRelease);
//! assert_eq!(product.price().display(), "$165.00");
//! ```

pub mod error;
pub mod money;

pub mod catalog;
pub mod display;

pub use catalog::Product;
pub use display::DisplayVariant;
pub use error::CommerceError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::Product;

    // Display
    pub use crate::display::{classify, is_new_release, DisplayVariant, RECENCY_WINDOW_DAYS};
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_root_exports_card_types() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let product: crate::Product = crate::Product::new("a", "A", "/a.jpg", 100)
            .with_release_date(now - Duration::days(400));

        assert_eq!(product.display_variant(now), crate::DisplayVariant::Default);
        assert_eq!(product.price(), crate::Money::new(100, crate::Currency::USD));
    }
}
