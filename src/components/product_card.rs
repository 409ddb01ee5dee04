//! Product recommendation card.

use dioxus::prelude::*;
use glowquiz_core::Product;

/// One recommended product with a link out to the shop page.
#[component]
pub fn ProductCard(product: Product) -> Element {
    rsx! {
        div { class: "product-card",
            h5 { class: "product-card__name", "{product.name}" }
            a {
                class: "product-card__link",
                href: "{product.link}",
                target: "_blank",
                "View Product"
            }
        }
    }
}
