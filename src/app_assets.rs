use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Window title, viewport and stylesheet for every route.
pub fn head_nodes(app_name: &str) -> Element {
    rsx! {
        document::Title { "{app_name} | Task Marketplace" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
    }
}
