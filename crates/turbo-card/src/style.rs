//! Per-variant card styling.

use serde::Serialize;
use turbo_commerce::display::DisplayVariant;

use crate::tokens::colors;

/// Corner flag shown on promoted cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagStyle {
    /// Flag text.
    pub label: &'static str,
    /// Flag background color.
    pub background: &'static str,
}

/// Styling applied to a card for one display variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantStyle {
    /// CSS `text-decoration` of the primary price.
    pub price_decoration: &'static str,
    /// Color of the primary price.
    pub price_color: &'static str,
    /// Flag, if this variant shows one.
    pub flag: Option<FlagStyle>,
}

const SALE: VariantStyle = VariantStyle {
    price_decoration: "line-through",
    price_color: colors::GRAY_700,
    flag: Some(FlagStyle {
        label: "Sale",
        background: colors::PRIMARY,
    }),
};

const NEW_RELEASE: VariantStyle = VariantStyle {
    price_decoration: "none",
    price_color: colors::GRAY_900,
    flag: Some(FlagStyle {
        label: "Just released!",
        background: colors::SECONDARY,
    }),
};

const REGULAR: VariantStyle = VariantStyle {
    price_decoration: "none",
    price_color: colors::GRAY_900,
    flag: None,
};

/// Look up the styling for a display variant.
pub fn style_for(variant: DisplayVariant) -> &'static VariantStyle {
    match variant {
        DisplayVariant::OnSale => &SALE,
        DisplayVariant::NewRelease => &NEW_RELEASE,
        DisplayVariant::Default => &REGULAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_strikes_through_price() {
        let style = style_for(DisplayVariant::OnSale);
        assert_eq!(style.price_decoration, "line-through");
        assert_eq!(style.price_color, colors::GRAY_700);
        assert_eq!(style.flag.map(|f| f.label), Some("Sale"));
    }

    #[test]
    fn test_flag_colors_differ_per_variant() {
        let sale = style_for(DisplayVariant::OnSale).flag.unwrap();
        let new = style_for(DisplayVariant::NewRelease).flag.unwrap();
        assert_ne!(sale.background, new.background);
        assert_eq!(new.label, "Just released!");
    }

    #[test]
    fn test_default_has_no_special_styling() {
        let style = style_for(DisplayVariant::Default);
        assert_eq!(style.price_decoration, "none");
        assert!(style.flag.is_none());
    }
}
