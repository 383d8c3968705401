use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;
use log::{error, info};

use crate::app::Route;
use crate::auth::AuthProvider;
use crate::format::naira;
use crate::mock;
use crate::state::{AppState, AuthState, FlashState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashTab {
    MyTasks,
    MyBids,
    Completed,
}

struct Entry {
    task_id: &'static str,
    title: &'static str,
    note: &'static str,
    amount: u64,
}

const MY_TASKS: [Entry; 1] = [
    Entry { task_id: "1", title: "Website Development for Local Business", note: "2 bids", amount: 50_000 },
];

const MY_BIDS: [Entry; 2] = [
    Entry { task_id: "2", title: "Logo Design for Tech Startup", note: "Pending", amount: 14_000 },
    Entry { task_id: "5", title: "Legal Document Review", note: "Pending", amount: 24_000 },
];

const COMPLETED: [Entry; 1] = [
    Entry { task_id: "4", title: "Mathematics Tutoring for High School Student", note: "Paid", amount: 12_000 },
];

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let auth = use_context::<AuthState>();
    let mut flash = use_context::<FlashState>();
    let nav = use_navigator();
    let mut tab = use_signal(|| DashTab::MyTasks);
    let mut user = state.user;

    let Some(current) = user.read().clone() else {
        return rsx! {
            div { class: "card",
                h2 { class: "title", "Sign in to view your dashboard" }
                Link { class: "btn btn-primary", to: Route::Login {}, "Login" }
            }
        };
    };

    let on_sign_out = move |_| {
        let client = auth.client.clone();
        spawn(async move {
            if let Err(e) = client.sign_out().await {
                error!("[Auth] Sign out failed: {e}");
            }
            info!("[Auth] Signed out");
            user.set(None);
            nav.push(Route::Home {});
        });
    };

    let active = *tab.read();
    let entries: &[Entry] = match active {
        DashTab::MyTasks => &MY_TASKS,
        DashTab::MyBids => &MY_BIDS,
        DashTab::Completed => &COMPLETED,
    };
    let open_tasks = mock::tasks().iter().filter(|t| t.posted_by.id == current.id).count();

    rsx! {
        div { class: "card",
            div { class: "row between",
                div {
                    h2 { class: "title", "Welcome back, {current.name}" }
                    span { class: "meta", "{current.email}" }
                }
                button { class: "btn btn-ghost", onclick: on_sign_out, "Sign Out" }
            }
        }
        div { class: "grid three",
            div { class: "card stat",
                div { class: "meta", "Active Tasks" }
                div { class: "stat-value", "{open_tasks}" }
                Link { class: "btn btn-link", to: Route::PostTask {}, "Post a new task" }
            }
            div { class: "card stat",
                div { class: "meta", "Wallet Balance" }
                div { class: "stat-value", "{naira(0)}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| flash.show("Wallet funding is coming soon."),
                    "Fund Wallet"
                }
            }
            div { class: "card stat",
                div { class: "meta", "Messages" }
                div { class: "stat-value", "3" }
                Link { class: "btn btn-link", to: Route::Messages { bid_id: String::new() }, "Open inbox" }
            }
        }
        div { class: "card",
            div { class: "tabs",
                button { class: if active == DashTab::MyTasks { "tab active" } else { "tab" }, onclick: move |_| tab.set(DashTab::MyTasks), "My Tasks" }
                button { class: if active == DashTab::MyBids { "tab active" } else { "tab" }, onclick: move |_| tab.set(DashTab::MyBids), "My Bids" }
                button { class: if active == DashTab::Completed { "tab active" } else { "tab" }, onclick: move |_| tab.set(DashTab::Completed), "Completed" }
            }
            ul { class: "list",
                for entry in entries.iter() {
                    li { key: "{entry.task_id}", class: "list-item",
                        div { class: "content",
                            div { class: "item-title", "{entry.title}" }
                            span { class: "meta", "{entry.note}" }
                        }
                        span { class: "budget", "{naira(entry.amount)}" }
                        Link { class: "btn btn-ghost", to: Route::TaskDetail { id: entry.task_id.to_string() }, "View" }
                    }
                }
            }
        }
    }
}
