//! Catalog listing product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::{classify, DisplayVariant};
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// A product as shown on a catalog card.
///
/// Owned by the caller and treated as immutable while a card is rendered.
/// Field names on the wire are camelCase (`imageSrc`, `salePrice`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Product name.
    pub name: String,
    /// Image URL or path.
    pub image_src: String,
    /// Current price in cents.
    #[serde(rename = "price")]
    pub price_cents: i64,
    /// Sale price in cents. Presence, not value, marks a sale.
    #[serde(rename = "salePrice", default, skip_serializing_if = "Option::is_none")]
    pub sale_price_cents: Option<i64>,
    /// When the product became available.
    pub release_date: DateTime<Utc>,
    /// Number of color options.
    #[serde(default)]
    pub num_of_colors: u32,
    /// Currency shared by both amounts.
    #[serde(default)]
    pub currency: Currency,
}

impl Product {
    /// Create a USD product released at the Unix epoch with one color.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price_cents: i64,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price_cents,
            sale_price_cents: None,
            // Unix epoch
            release_date: DateTime::<Utc>::default(),
            num_of_colors: 1,
            currency: Currency::USD,
        }
    }

    pub fn with_sale_price(mut self, sale_price_cents: i64) -> Self {
        self.sale_price_cents = Some(sale_price_cents);
        self
    }

    pub fn with_release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn with_colors(mut self, num_of_colors: u32) -> Self {
        self.num_of_colors = num_of_colors;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Current price.
    pub fn price(&self) -> Money {
        Money::new(self.price_cents, self.currency)
    }

    /// Sale price, if one is set.
    pub fn sale_price(&self) -> Option<Money> {
        self.sale_price_cents.map(|cents| Money::new(cents, self.currency))
    }

    /// Navigation target for this product's detail page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Display variant at the given instant.
    pub fn display_variant(&self, now: DateTime<Utc>) -> DisplayVariant {
        classify(self.sale_price(), self.release_date, now)
    }

    /// Reject data the card cannot represent.
    ///
    /// Rendering assumes well-formed input; call this where products enter
    /// the system.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.slug.trim().is_empty() {
            return Err(CommerceError::EmptySlug);
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::EmptyName(self.slug.clone()));
        }
        if self.price_cents < 0 {
            return Err(CommerceError::InvalidPrice {
                slug: self.slug.clone(),
                amount_cents: self.price_cents,
            });
        }
        if let Some(cents) = self.sale_price_cents.filter(|c| *c < 0) {
            return Err(CommerceError::InvalidSalePrice {
                slug: self.slug.clone(),
                amount_cents: cents,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample() -> Product {
        Product::new("air-glide", "Air Glide", "/shoes/air-glide.jpg", 16500)
    }

    #[test]
    fn test_product_creation() {
        let product = sample();
        assert_eq!(product.slug, "air-glide");
        assert_eq!(product.price(), Money::usd(16500));
        assert_eq!(product.sale_price(), None);
        assert_eq!(product.href(), "/shoe/air-glide");
    }

    #[test]
    fn test_sale_price_uses_product_currency() {
        let product = sample().with_currency(Currency::EUR).with_sale_price(9999);
        assert_eq!(product.sale_price(), Some(Money::new(9999, Currency::EUR)));
    }

    #[test]
    fn test_display_variant_delegates_to_classifier() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let product = sample().with_release_date(now - Duration::days(3));
        assert_eq!(product.display_variant(now), DisplayVariant::NewRelease);
        assert_eq!(
            product.with_sale_price(0).display_variant(now),
            DisplayVariant::OnSale
        );
    }

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "slug": "tech-challenge-777",
            "name": "NikeCourt Tech Challenge 20",
            "imageSrc": "/assets/tech-challenge-777.jpg",
            "price": 16500,
            "salePrice": null,
            "releaseDate": "2024-05-20T00:00:00Z",
            "numOfColors": 2
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price_cents, 16500);
        assert_eq!(product.sale_price_cents, None);
        assert_eq!(product.num_of_colors, 2);
        assert_eq!(product.currency, Currency::USD);
        assert_eq!(
            product.release_date,
            Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_validate_accepts_zero_prices() {
        assert_eq!(sample().with_sale_price(0).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let mut product = sample();
        product.price_cents = -1;
        assert_eq!(
            product.validate(),
            Err(CommerceError::InvalidPrice {
                slug: "air-glide".to_string(),
                amount_cents: -1
            })
        );

        let product = sample().with_sale_price(-5);
        assert!(matches!(
            product.validate(),
            Err(CommerceError::InvalidSalePrice { amount_cents: -5, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_identity() {
        let mut product = sample();
        product.slug = "  ".to_string();
        assert_eq!(product.validate(), Err(CommerceError::EmptySlug));

        let mut product = sample();
        product.name = String::new();
        assert_eq!(
            product.validate(),
            Err(CommerceError::EmptyName("air-glide".to_string()))
        );
    }
}
