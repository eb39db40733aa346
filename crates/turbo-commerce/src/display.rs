//! Display variant classification for catalog cards.
//!
//! A product card is shown in exactly one of three modes. Sale status is an
//! explicit flag and always wins over the time-derived "new release" mode,
//! even when both apply.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Days after release during which a product counts as a new release.
pub const RECENCY_WINDOW_DAYS: i64 = 30;

/// Mutually exclusive display mode of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    /// A sale price is set.
    OnSale,
    /// Released within the recency window.
    NewRelease,
    /// Regular listing, no flag.
    #[default]
    Default,
}

impl DisplayVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayVariant::OnSale => "on-sale",
            DisplayVariant::NewRelease => "new-release",
            DisplayVariant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-sale" => Some(DisplayVariant::OnSale),
            "new-release" => Some(DisplayVariant::NewRelease),
            "default" => Some(DisplayVariant::Default),
            _ => None,
        }
    }

    /// Whether the card carries a promotional flag.
    pub fn is_flagged(&self) -> bool {
        !matches!(self, DisplayVariant::Default)
    }
}

impl fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recency predicate: strictly less than the window has elapsed since release.
///
/// Release dates after `now` have a negative age and count as new.
pub fn is_new_release(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(release_date) < Duration::days(RECENCY_WINDOW_DAYS)
}

/// Classify a product into its display variant. First match wins:
/// sale price present, then released within the window, then default.
///
/// `now` is injected; this never reads the system clock.
pub fn classify(
    sale_price: Option<Money>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DisplayVariant {
    let variant = if sale_price.is_some() {
        DisplayVariant::OnSale
    } else if is_new_release(release_date, now) {
        DisplayVariant::NewRelease
    } else {
        DisplayVariant::Default
    };

    tracing::debug!(variant = variant.as_str(), %release_date, %now, "classified display variant");
    variant
}
