use dioxus::events::Key;
use dioxus::prelude::*;

use crate::forms::bid::{submit_bid, BidForm, BID_ACK};
use crate::state::FlashState;

/// Modal for placing a bid on one task.
#[component]
pub fn BidDialog(task_id: String, task_title: String, on_close: EventHandler<()>) -> Element {
    let mut flash = use_context::<FlashState>();
    let mut form = use_signal(BidForm::default);
    let ready = form.read().is_complete();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        match submit_bid(&task_id, &form.read()) {
            Ok(_) => {
                flash.show(BID_ACK);
                on_close.call(());
            }
            Err(err) => flash.show(err.to_string()),
        }
    };

    rsx! {
        div { class: "modal-overlay", tabindex: 0, onkeydown: move |e: KeyboardEvent| if e.key() == Key::Escape { on_close.call(()) },
            div { class: "modal",
                h3 { class: "title", "Place a Bid" }
                p { class: "meta", "{task_title}" }
                form { class: "stack", onsubmit: on_submit,
                    label { "Your Bid Amount (₦)" }
                    input {
                        class: "text",
                        r#type: "number",
                        placeholder: "Enter your bid amount",
                        value: "{form.read().amount}",
                        oninput: move |e| form.write().amount = e.value(),
                    }
                    label { "Timeframe" }
                    input {
                        class: "text",
                        r#type: "text",
                        placeholder: "e.g. 2 weeks",
                        value: "{form.read().timeframe}",
                        oninput: move |e| form.write().timeframe = e.value(),
                    }
                    label { "Proposal" }
                    textarea {
                        class: "text",
                        rows: "5",
                        placeholder: "Describe why you're the best fit for this task",
                        value: "{form.read().proposal}",
                        oninput: move |e| form.write().proposal = e.value(),
                    }
                    div { class: "actions",
                        button { class: "btn btn-ghost", r#type: "button", onclick: move |_| on_close.call(()), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", disabled: !ready, "Submit Bid" }
                    }
                }
            }
        }
    }
}
