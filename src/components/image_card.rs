use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::api::{image_url, AuthToken};
use crate::config::THUMBNAIL_SIZE;
use crate::db;

/// Clickable thumbnail of a stored object.
///
/// Hosts rendering many cards pass `tokens` read once for the whole pass. A card
/// without them reads the store itself on every render.
#[component]
pub fn ImageCard(
    url: String,
    onclick: EventHandler<()>,
    #[props(default = THUMBNAIL_SIZE)] size: u32,
    #[props(default = String::new())] alt: String,
    tokens: Option<Vec<AuthToken>>,
) -> Element {
    let tokens = tokens.unwrap_or_else(db::load_tokens);
    let src = image_url(&url, size, &tokens).unwrap_or_else(|e| {
        warn!("could not encode image request for {url}: {e}");
        String::new()
    });

    rsx! {
        button {
            class: "image-card image-card--secondary",
            r#type: "button",
            onclick: move |_| onclick.call(()),
            img {
                class: "image-card__img image-card__img--top",
                src: "{src}",
                alt: "{alt}",
                loading: "lazy",
            }
        }
    }
}
