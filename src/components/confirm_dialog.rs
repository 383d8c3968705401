use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: String,
    body: String,
    confirm_label: String,
    #[props(default)] danger: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        // modal overlay captures keys; Escape closes
        div { class: "modal-overlay", tabindex: 0, onkeydown: move |e: KeyboardEvent| if e.key() == Key::Escape { on_cancel.call(()) },
            div { class: "modal",
                h3 { class: "title", "{title}" }
                p { class: "meta", "{body}" }
                div { class: "actions",
                    button {
                        class: if danger { "btn btn-danger" } else { "btn btn-success" },
                        autofocus: "true",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button { class: "btn btn-ghost", onclick: move |_| on_cancel.call(()), "Cancel" }
                }
            }
        }
    }
}
