use dioxus::prelude::*;

/// Five stars, filled up to the rounded rating.
#[component]
pub fn Stars(rating: f32) -> Element {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    rsx! {
        span { class: "stars", title: "{rating:.1}",
            for i in 0..5usize {
                span { key: "{i}", class: if i < filled { "star on" } else { "star" }, "★" }
            }
            span { class: "meta", " {rating:.1}" }
        }
    }
}
