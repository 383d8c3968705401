use dioxus::prelude::*;

use crate::app_assets::head_nodes;
use crate::auth::AuthClient;
use crate::components::flash::FlashBanner;
use crate::components::nav::MainNavigation;
use crate::config::Config;
use crate::models::{JobPosting, Settings, User};
use crate::pages::auth::{Auth, Login, Register};
use crate::pages::dashboard::Dashboard;
use crate::pages::home::Home;
use crate::pages::marketplace::Marketplace;
use crate::pages::messages::Messages;
use crate::pages::post_task::PostTask;
use crate::pages::settings::SettingsPage;
use crate::pages::task_detail::TaskDetail;
use crate::state::{AppState, AuthState, FlashState};
use crate::storage::load_settings;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")] Home {},
        #[route("/dashboard")] Dashboard {},
        #[route("/marketplace")] Marketplace {},
        #[route("/task/:id")] TaskDetail { id: String },
        #[route("/auth")] Auth {},
        #[route("/login")] Login {},
        #[route("/register")] Register {},
        #[route("/post-task")] PostTask {},
        #[route("/messages?:bid_id")] Messages { bid_id: String },
        #[route("/settings")] SettingsPage {},
        #[route("/:..segments")] NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_env);
    let client = use_hook(|| AuthClient::from_config(&config));

    let user = use_signal(|| Option::<User>::None);
    let mut settings = use_signal(Settings::default);
    let postings = use_signal(Vec::<JobPosting>::new);
    let flash = use_signal(|| Option::<String>::None);

    use_context_provider(|| AppState { user, settings, postings });
    use_context_provider(|| AuthState { client: client.clone(), config: config.clone() });
    use_context_provider(|| FlashState { msg: flash });

    // One-time load from disk after first render
    use_effect(move || {
        settings.set(load_settings());
    });

    rsx! { Router::<Route> {} }
}

/// Layout shared by every route.
#[component]
fn Shell() -> Element {
    let state = use_context::<AppState>();
    let auth = use_context::<AuthState>();
    let dark = state.settings.read().dark_mode;
    rsx! {
        { head_nodes(&auth.config.app_name) }
        div { class: if dark { "app dark" } else { "app" },
            MainNavigation {}
            FlashBanner {}
            main { class: "page", Outlet::<Route> {} }
        }
    }
}

/// Unknown paths render the landing page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    log::debug!("[Router] No route for /{}, showing home", segments.join("/"));
    rsx! { Home {} }
}
