//! Text helpers for card content.

use turbo_commerce::Money;

/// Format a price for display (e.g., "$165.00").
pub fn format_price(price: Money) -> String {
    price.display()
}

/// Prefix a count to a word, adding "s" unless the count is exactly one.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_commerce::Currency;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("Color", 0), "0 Colors");
        assert_eq!(pluralize("Color", 1), "1 Color");
        assert_eq!(pluralize("Color", 3), "3 Colors");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Money::usd(9999)), "$99.99");
        assert_eq!(format_price(Money::new(12000, Currency::GBP)), "\u{00a3}120.00");
    }
}
