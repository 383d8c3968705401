use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::app::Route;
use crate::components::bid_dialog::BidDialog;
use crate::components::rating::Stars;
use crate::format::{initials, naira, short_date};
use crate::models::Task;
use crate::state::AppState;

#[component]
pub fn TaskCard(task: Task) -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();
    let mut bidding = use_signal(|| false);
    let signed_in = state.user.read().is_some();

    let id = task.id.clone();
    let on_bid = move |_| {
        if signed_in {
            bidding.set(true);
        } else {
            nav.push(Route::Login {});
        }
    };

    rsx! {
        li { class: "task-card",
            div { class: "row between",
                span { class: "badge", "{task.category}" }
                span { class: "budget", "{naira(task.budget)}" }
            }
            h3 {
                class: "item-title link",
                onclick: move |_| { nav.push(Route::TaskDetail { id: id.clone() }); },
                "{task.title}"
            }
            p { class: "meta clamp", "{task.description}" }
            div { class: "chips",
                for skill in task.skills.iter() {
                    span { key: "{skill}", class: "chip", "{skill}" }
                }
            }
            div { class: "row between meta",
                span { "📍 {task.location}" }
                span { "⏰ Due {short_date(task.deadline)}" }
                span { "{task.bid_count} bids" }
            }
            div { class: "row between card-foot",
                div { class: "poster",
                    span { class: "avatar", "{initials(&task.posted_by.name)}" }
                    div {
                        div { "{task.posted_by.name}" }
                        Stars { rating: task.posted_by.rating }
                    }
                }
                button { class: "btn btn-primary", onclick: on_bid, "Bid Now" }
            }
            if *bidding.read() {
                BidDialog {
                    task_id: task.id.clone(),
                    task_title: task.title.clone(),
                    on_close: move |_| bidding.set(false),
                }
            }
        }
    }
}
