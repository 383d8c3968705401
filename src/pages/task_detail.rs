use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;
use log::{info, warn};

use crate::app::Route;
use crate::components::bid_dialog::BidDialog;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::rating::Stars;
use crate::format::{initials, long_date, naira, short_date};
use crate::mock;
use crate::models::{Bid, BidDecision, BidStatus, TaskStatus};
use crate::state::{AppState, FlashState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Details,
    Bids,
    Client,
}

/// Title, body and button label for the decision prompt.
fn confirm_copy(decision: BidDecision) -> (&'static str, &'static str, &'static str) {
    match decision {
        BidDecision::Accept => (
            "Accept this bid?",
            "The freelancer will be notified and you can start messaging them.",
            "Accept Bid",
        ),
        BidDecision::Reject => (
            "Reject this bid?",
            "The freelancer will be notified that their bid was not selected.",
            "Reject Bid",
        ),
    }
}

#[component]
pub fn TaskDetail(id: String) -> Element {
    let state = use_context::<AppState>();
    let mut flash = use_context::<FlashState>();
    let nav = use_navigator();
    let mut tab = use_signal(|| DetailTab::Details);
    let mut bids = use_signal(|| mock::bids_for(&id));
    let mut pending = use_signal(|| Option::<(String, BidDecision)>::None);
    let mut bidding = use_signal(|| false);

    let Some(task) = mock::find_task(&id).cloned() else {
        return rsx! {
            div { class: "card",
                h2 { class: "title", "Task not found" }
                p { class: "meta", "The task you're looking for doesn't exist or has been removed." }
                Link { class: "btn btn-primary", to: Route::Marketplace {}, "Back to Marketplace" }
            }
        };
    };

    let user = state.user.read().clone();
    let is_owner = user.as_ref().is_some_and(|u| u.id == task.posted_by.id);
    let can_bid = !is_owner && task.status == TaskStatus::Open;

    let mut decide = move |bid_id: String, decision: BidDecision| {
        let outcome = bids
            .write()
            .iter_mut()
            .find(|b| b.id == bid_id)
            .map(|b| b.decide(decision));
        match outcome {
            Some(Ok(BidStatus::Accepted)) => {
                info!("[Bid] Accepted {bid_id}");
                flash.show("Bid accepted! You can now message the freelancer.");
                nav.push(Route::Messages { bid_id });
            }
            Some(Ok(status)) => {
                info!("[Bid] {bid_id} is now {}", status.label());
                flash.show("Bid rejected.");
            }
            Some(Err(e)) => {
                warn!("[Bid] Refused decision on {bid_id}: {e}");
                flash.show(e.to_string());
            }
            None => warn!("[Bid] No bid {bid_id} on this task"),
        }
    };

    let on_place_bid = move |_| {
        if state.user.read().is_some() {
            bidding.set(true);
        } else {
            nav.push(Route::Login {});
        }
    };

    let bid_list: Vec<Bid> = bids.read().clone();
    let active_tab = *tab.read();
    let tab_class = move |t: DetailTab| if t == active_tab { "tab active" } else { "tab" };

    rsx! {
        div { class: "card",
            div { class: "row between", style: "margin-bottom:12px;",
                button { class: "btn btn-ghost", onclick: move |_| { nav.push(Route::Marketplace {}); }, "← Back" }
                span { class: "badge", "{task.status.label()}" }
            }
            h2 { class: "title", "{task.title}" }
            div { class: "row meta",
                span { class: "badge", "{task.category}" }
                span { "📍 {task.location}" }
                span { "⏰ Due {long_date(task.deadline)}" }
            }
            div { class: "row between",
                span { class: "budget", "{naira(task.budget)}" }
                if can_bid {
                    button { class: "btn btn-primary", onclick: on_place_bid, "Place a Bid" }
                }
            }
            div { class: "tabs",
                button { class: tab_class(DetailTab::Details), onclick: move |_| tab.set(DetailTab::Details), "Details" }
                button { class: tab_class(DetailTab::Bids), onclick: move |_| tab.set(DetailTab::Bids), "Bids ({bid_list.len()})" }
                button { class: tab_class(DetailTab::Client), onclick: move |_| tab.set(DetailTab::Client), "Client" }
            }
            {
                match active_tab {
                    DetailTab::Details => rsx! {
                        h3 { "Description" }
                        p { "{task.description}" }
                        h3 { "Skills Required" }
                        div { class: "chips",
                            for skill in task.skills.iter() {
                                span { key: "{skill}", class: "chip", "{skill}" }
                            }
                        }
                    },
                    DetailTab::Bids => rsx! {
                        if bid_list.is_empty() {
                            p { class: "meta", "No bids yet." }
                        }
                        ul { class: "list",
                            for bid in bid_list.iter().cloned() {
                                li { key: "{bid.id}", class: "list-item bid",
                                    div { class: "poster",
                                        span { class: "avatar", "{initials(&bid.bidder_name)}" }
                                        div {
                                            div { class: "item-title", "{bid.bidder_name}" }
                                            div { class: "meta", "Submitted {short_date(bid.created_at.date_naive())}" }
                                        }
                                    }
                                    div { class: "content",
                                        div { class: "row between",
                                            span { class: "budget", "{naira(bid.amount)}" }
                                            span { class: "meta", "{bid.timeframe}" }
                                            span { class: "badge", "{bid.status.label()}" }
                                        }
                                        p { "{bid.proposal}" }
                                    }
                                    if is_owner && bid.status == BidStatus::Pending {
                                        div { class: "actions",
                                            button {
                                                class: "btn btn-success",
                                                onclick: {
                                                    let id = bid.id.clone();
                                                    move |_| pending.set(Some((id.clone(), BidDecision::Accept)))
                                                },
                                                "Accept"
                                            }
                                            button {
                                                class: "btn btn-danger",
                                                onclick: {
                                                    let id = bid.id.clone();
                                                    move |_| pending.set(Some((id.clone(), BidDecision::Reject)))
                                                },
                                                "Reject"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    DetailTab::Client => rsx! {
                        div { class: "poster",
                            span { class: "avatar", "{initials(&task.posted_by.name)}" }
                            div {
                                h3 { "{task.posted_by.name}" }
                                Stars { rating: task.posted_by.rating }
                            }
                        }
                    },
                }
            }
        }
        if let Some((bid_id, decision)) = pending.read().clone() {
            ConfirmDialog {
                title: confirm_copy(decision).0.to_string(),
                body: confirm_copy(decision).1.to_string(),
                confirm_label: confirm_copy(decision).2.to_string(),
                danger: decision == BidDecision::Reject,
                on_confirm: move |_| {
                    pending.set(None);
                    decide(bid_id.clone(), decision);
                },
                on_cancel: move |_| pending.set(None),
            }
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
