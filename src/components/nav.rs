use dioxus::prelude::*;

use crate::app::Route;
use crate::state::{AppState, AuthState};

#[component]
pub fn MainNavigation() -> Element {
    let state = use_context::<AppState>();
    let auth = use_context::<AuthState>();
    let mut menu_open = use_signal(|| false);
    let user = state.user.read().clone();
    let app_name = auth.config.app_name.clone();

    let links = [
        (Route::Home {}, "Home"),
        (Route::Marketplace {}, "Marketplace"),
        (Route::PostTask {}, "Post a Task"),
        (Route::Dashboard {}, "Dashboard"),
        (Route::SettingsPage {}, "Settings"),
    ];

    rsx! {
        nav { class: "nav",
            div { class: "nav-bar",
                Link { class: "brand", to: Route::Home {}, "{app_name}" }
                button {
                    class: "btn btn-ghost nav-toggle",
                    onclick: move |_| {
                        let open = !*menu_open.read();
                        log::debug!("[Nav] Menu {}", if open { "opened" } else { "closed" });
                        menu_open.set(open);
                    },
                    if *menu_open.read() { "✕" } else { "☰" }
                }
                div { class: if *menu_open.read() { "nav-links open" } else { "nav-links" },
                    for (to, label) in links {
                        Link {
                            key: "{label}",
                            class: "nav-link",
                            active_class: "active",
                            to: to,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    if let Some(u) = user {
                        span { class: "nav-user meta", "{u.name}" }
                    } else {
                        Link { class: "btn btn-primary", to: Route::Auth {}, onclick: move |_| menu_open.set(false), "Sign In" }
                    }
                }
            }
        }
    }
}
