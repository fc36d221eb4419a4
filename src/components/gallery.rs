use dioxus::prelude::*;

use super::ImageCard;
use crate::db;

#[component]
pub fn Gallery(keys: Vec<String>) -> Element {
    let mut selected = use_signal(|| None::<String>);

    if keys.is_empty() {
        return rsx! {
            p { class: "gallery__empty", "No images yet" }
        };
    }

    // One store read per pass, shared by every card.
    let tokens = db::load_tokens();

    rsx! {
        div { class: "gallery",
            {keys.into_iter().map(|key| {
                let is_selected = selected().as_deref() == Some(key.as_str());
                let clicked = key.clone();
                rsx! {
                    div {
                        key: "{key}",
                        class: if is_selected { "gallery__item gallery__item--selected" } else { "gallery__item" },
                        ImageCard {
                            url: key.clone(),
                            alt: key.clone(),
                            tokens: tokens.clone(),
                            onclick: move |_| selected.set(Some(clicked.clone())),
                        }
                    }
                }
            })}
        }
        {selected().map(|key| rsx! {
            p { class: "gallery__selection", "Selected: {key}" }
        })}
    }
}
