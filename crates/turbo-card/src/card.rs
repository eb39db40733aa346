//! Product card renderer.

use chrono::{DateTime, Utc};
use turbo_commerce::display::DisplayVariant;
use turbo_commerce::Product;

use crate::format::{format_price, pluralize};
use crate::style::{style_for, FlagStyle};
use crate::tokens::{colors, weights, IMAGE_SPACING_PX};
use crate::view::{Element, ViewNode};

/// Render a product card for an already classified variant.
///
/// The whole card is one link to the product page. Only `on-sale` shows the
/// struck-through price and the secondary sale price; any variant other than
/// `default` gets a corner flag.
pub fn render(product: &Product, variant: DisplayVariant) -> ViewNode {
    let style = style_for(variant);

    let sale_price = match variant {
        DisplayVariant::OnSale => product.sale_price().map(|sale| {
            Element::new("span")
                .class("product-card__sale-price")
                .style("font-weight", weights::MEDIUM)
                .style("color", colors::PRIMARY)
                .text(format_price(sale))
        }),
        _ => None,
    };

    let price = Element::new("span")
        .class("product-card__price")
        .style("color", style.price_color)
        .style("text-decoration", style.price_decoration)
        .style("font-weight", weights::NORMAL)
        .text(format_price(product.price()));

    let wrapper = Element::new("article")
        .class("product-card")
        .attr("data-variant", variant.as_str())
        .style("position", "relative")
        .child(render_image(product))
        .child(render_spacer(IMAGE_SPACING_PX))
        .child(
            render_row()
                .child(
                    Element::new("h3")
                        .class("product-card__name")
                        .style("font-weight", weights::MEDIUM)
                        .style("color", colors::GRAY_900)
                        .text(product.name.as_str()),
                )
                .child(
                    Element::new("div")
                        .class("product-card__price-wrapper")
                        .style("display", "flex")
                        .style("flex-direction", "column")
                        .child(price),
                ),
        )
        .child(
            render_row()
                .child(
                    Element::new("p")
                        .class("product-card__colors")
                        .style("color", colors::GRAY_700)
                        .text(pluralize("Color", product.num_of_colors)),
                )
                .child_opt(sale_price),
        )
        .child_opt(style.flag.map(render_flag));

    tracing::debug!(
        slug = %product.slug,
        variant = variant.as_str(),
        "rendered product card"
    );

    Element::new("a")
        .class("product-card-link")
        .attr("href", product.href())
        .style("text-decoration", "none")
        .style("color", "inherit")
        .child(wrapper)
        .into()
}

/// Classify the product at `now`, then render it.
pub fn render_card(product: &Product, now: DateTime<Utc>) -> ViewNode {
    render(product, product.display_variant(now))
}

/// Render cards for a list of products in order, all against the same `now`.
pub fn render_cards(products: &[Product], now: DateTime<Utc>) -> Vec<ViewNode> {
    products.iter().map(|p| render_card(p, now)).collect()
}

fn render_image(product: &Product) -> Element {
    Element::new("div")
        .class("product-card__image-wrapper")
        .style("position", "relative")
        .child(
            Element::new("img")
                .class("product-card__image")
                .attr("alt", "")
                .attr("src", product.image_src.as_str())
                .style("width", "100%"),
        )
}

fn render_spacer(size_px: u32) -> Element {
    Element::new("div")
        .class("spacer")
        .style("min-width", format!("{size_px}px"))
        .style("min-height", format!("{size_px}px"))
}

fn render_row() -> Element {
    Element::new("div")
        .class("product-card__row")
        .style("font-size", "1rem")
        .style("display", "flex")
        .style("justify-content", "space-between")
}

fn render_flag(flag: FlagStyle) -> Element {
    Element::new("div")
        .class("product-card__flag")
        .style("position", "absolute")
        .style("top", "8px")
        .style("right", "-5px")
        .style("background-color", flag.background)
        .style("padding", "9px")
        .style("color", colors::WHITE)
        .style("font-weight", weights::BOLDISH)
        .style("font-size", "14px")
        .style("border-radius", "2px")
        .text(flag.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn product() -> Product {
        Product::new("air-glide", "Air Glide", "/shoes/air-glide.jpg", 16500)
            .with_release_date(now() - Duration::days(120))
            .with_colors(2)
    }

    #[test]
    fn test_card_is_single_link() {
        let card = render(&product(), DisplayVariant::Default);
        let link = card.as_element().unwrap();

        assert_eq!(link.tag, "a");
        assert_eq!(link.attr_value("href"), Some("/shoe/air-glide"));
        assert_eq!(link.children.len(), 1);
    }

    #[test]
    fn test_always_shows_core_fields() {
        for variant in [
            DisplayVariant::OnSale,
            DisplayVariant::NewRelease,
            DisplayVariant::Default,
        ] {
            let card = render(&product().with_sale_price(9999), variant);

            let image = card.find_by_class("product-card__image").unwrap();
            assert_eq!(image.attr_value("src"), Some("/shoes/air-glide.jpg"));
            assert_eq!(image.attr_value("alt"), Some(""));
            assert_eq!(
                card.find_by_class("product-card__name").unwrap().text_content(),
                "Air Glide"
            );
            assert_eq!(
                card.find_by_class("product-card__price").unwrap().text_content(),
                "$165.00"
            );
            assert_eq!(
                card.find_by_class("product-card__colors").unwrap().text_content(),
                "2 Colors"
            );
        }
    }

    #[test]
    fn test_sale_price_hidden_unless_on_sale() {
        let product = product().with_sale_price(9999);
        let card = render(&product, DisplayVariant::NewRelease);
        assert!(card.find_by_class("product-card__sale-price").is_none());

        let card = render(&product, DisplayVariant::OnSale);
        assert_eq!(
            card.find_by_class("product-card__sale-price").unwrap().text_content(),
            "$99.99"
        );
    }

    #[test]
    fn test_price_styling_follows_variant() {
        let card = render(&product().with_sale_price(100), DisplayVariant::OnSale);
        let price = card.find_by_class("product-card__price").unwrap();
        assert_eq!(price.style_value("text-decoration"), Some("line-through"));
        assert_eq!(price.style_value("color"), Some(colors::GRAY_700));

        let card = render(&product(), DisplayVariant::Default);
        let price = card.find_by_class("product-card__price").unwrap();
        assert_eq!(price.style_value("text-decoration"), Some("none"));
        assert_eq!(price.style_value("color"), Some(colors::GRAY_900));
    }

    #[test]
    fn test_flag_per_variant() {
        let card = render(&product(), DisplayVariant::Default);
        assert!(card.find_by_class("product-card__flag").is_none());

        let card = render(&product(), DisplayVariant::NewRelease);
        let flag = card.find_by_class("product-card__flag").unwrap();
        assert_eq!(flag.text_content(), "Just released!");
        assert_eq!(flag.style_value("background-color"), Some(colors::SECONDARY));
    }

    #[test]
    fn test_render_card_classifies_at_now() {
        let fresh = product().with_release_date(now() - Duration::days(1));
        let card = render_card(&fresh, now());
        let article = card.find_by_class("product-card").unwrap();
        assert_eq!(article.attr_value("data-variant"), Some("new-release"));
    }

    #[test]
    fn test_render_cards_keeps_order() {
        let products = vec![
            product(),
            Product::new("b", "B", "/b.jpg", 100).with_sale_price(50),
        ];
        let cards = render_cards(&products, now());
        assert_eq!(cards.len(), 2);
        assert_eq!(
            cards[1].as_element().unwrap().attr_value("href"),
            Some("/shoe/b")
        );
    }
}
