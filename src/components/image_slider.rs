use std::time::Duration;

use dioxus::prelude::*;

use crate::mock::SLIDES;

const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

/// Rotating hero images. Advances on a timer; arrows and dots jump directly.
#[component]
pub fn ImageSlider() -> Element {
    let mut current = use_signal(|| 0usize);
    let count = SLIDES.len();

    use_future(move || async move {
        loop {
            tokio::time::sleep(SLIDE_INTERVAL).await;
            current.with_mut(|i| *i = (*i + 1) % count);
        }
    });

    let idx = *current.read();
    let slide = SLIDES[idx % count].clone();

    rsx! {
        div { class: "slider",
            img { class: "slide", src: "{slide.url}", alt: "{slide.alt}" }
            div { class: "slide-caption", "{slide.caption}" }
            button {
                class: "slider-arrow prev",
                onclick: move |_| current.with_mut(|i| *i = (*i + count - 1) % count),
                "‹"
            }
            button {
                class: "slider-arrow next",
                onclick: move |_| current.with_mut(|i| *i = (*i + 1) % count),
                "›"
            }
            div { class: "dots",
                for i in 0..count {
                    button {
                        key: "{i}",
                        class: if i == idx { "dot active" } else { "dot" },
                        onclick: move |_| current.set(i),
                    }
                }
            }
        }
    }
}
