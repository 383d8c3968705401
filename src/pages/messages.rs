use dioxus::events::Key;
use dioxus::prelude::*;

use crate::format::{clock_time, initials};
use crate::forms::chat;
use crate::mock;
use crate::models::Sender;

const COUNTERPART: &str = "John Doe";

/// Conversation opened after a bid is accepted. Messages live only in this view.
#[component]
pub fn Messages(bid_id: String) -> Element {
    let mut messages = use_signal(mock::seed_conversation);
    let mut draft = use_signal(String::new);

    let mut send = move || {
        let text = draft.read().clone();
        if chat::send(&mut messages.write(), &text) {
            draft.set(String::new());
        }
    };

    let thread = messages.read().clone();
    let context = if bid_id.is_empty() {
        "Direct conversation".to_string()
    } else {
        format!("Regarding bid #{bid_id}")
    };

    rsx! {
        div { class: "card chat",
            div { class: "row between chat-head",
                div { class: "poster",
                    span { class: "avatar", "{initials(COUNTERPART)}" }
                    div {
                        div { class: "item-title", "{COUNTERPART}" }
                        div { class: "meta", "{context}" }
                    }
                }
            }
            ul { class: "chat-log",
                for m in thread.into_iter() {
                    li {
                        key: "{m.id}",
                        class: if m.sender == Sender::User { "bubble mine" } else { "bubble theirs" },
                        p { "{m.content}" }
                        span { class: "meta", "{clock_time(m.timestamp)}" }
                    }
                }
            }
            div { class: "add",
                input {
                    class: "text",
                    placeholder: "Type a message...",
                    value: "{draft.read()}",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e: KeyboardEvent| if e.key() == Key::Enter { send() },
                }
                button { class: "btn btn-primary", onclick: move |_| send(), "Send" }
            }
        }
    }
}
