use dioxus::prelude::*;

use crate::state::FlashState;

/// One-line notice shown above the page until dismissed.
#[component]
pub fn FlashBanner() -> Element {
    let mut flash = use_context::<FlashState>();
    let msg = flash.msg.read().clone();
    let Some(text) = msg else {
        return rsx! {};
    };
    rsx! {
        div { class: "flash", role: "status",
            span { "{text}" }
            button { class: "btn btn-ghost btn-icon", onclick: move |_| flash.msg.set(None), "✖" }
        }
    }
}
