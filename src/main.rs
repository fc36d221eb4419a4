use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod db;

use components::Gallery;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let keys = use_hook(db::load_image_keys);

    rsx! {
        document::Stylesheet { href: APP_CSS }
        document::Meta { name: "theme-color", content: "#6c757d" }

        main { class: "app",
            Gallery { keys }
        }
    }
}
