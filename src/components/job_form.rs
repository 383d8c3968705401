use dioxus::events::Key;
use dioxus::prelude::*;

use crate::forms::job::{submit_job, JobForm};
use crate::models::{JobPosting, JobType};
use crate::state::FlashState;

/// "Post a Job" trigger plus its modal form.
#[component]
pub fn JobPostingDialog(on_posted: EventHandler<JobPosting>) -> Element {
    let mut flash = use_context::<FlashState>();
    let mut open = use_signal(|| false);
    let mut form = use_signal(JobForm::default);
    let can_submit = form.read().can_submit();

    let mut add_skill = move || {
        form.write().add_skill();
    };
    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        match submit_job(&form.read()) {
            Ok(posting) => {
                flash.show(format!("Job \"{}\" posted", posting.title));
                on_posted.call(posting);
            }
            Err(err) => {
                flash.show(err.to_string());
                return;
            }
        }
        form.write().reset();
        open.set(false);
    };

    rsx! {
        button { class: "btn btn-primary", onclick: move |_| open.set(true), "Post a Job" }
        if *open.read() {
            div { class: "modal-overlay", tabindex: 0, onkeydown: move |e: KeyboardEvent| if e.key() == Key::Escape { open.set(false) },
                div { class: "modal wide",
                    h3 { class: "title", "Post a New Job" }
                    form { class: "stack", onsubmit: on_submit,
                        label { "Job Title" }
                        input { class: "text", value: "{form.read().title}", placeholder: "e.g. Frontend Developer", oninput: move |e| form.write().title = e.value() }
                        label { "Company" }
                        input { class: "text", value: "{form.read().company}", placeholder: "Company name", oninput: move |e| form.write().company = e.value() }
                        div { class: "grid two",
                            div {
                                label { "Location" }
                                input { class: "text", value: "{form.read().location}", placeholder: "e.g. Lagos, Nigeria", oninput: move |e| form.write().location = e.value() }
                            }
                            div {
                                label { "Job Type" }
                                select {
                                    class: "text",
                                    value: "{form.read().job_type.value()}",
                                    onchange: move |e: FormEvent| {
                                        if let Ok(t) = e.value().parse::<JobType>() {
                                            form.write().job_type = t;
                                        }
                                    },
                                    for t in JobType::ALL {
                                        option { key: "{t.value()}", value: "{t.value()}", selected: t == form.read().job_type, "{t.label()}" }
                                    }
                                }
                            }
                        }
                        label { "Job Description" }
                        textarea { class: "text", rows: "5", value: "{form.read().description}", oninput: move |e| form.write().description = e.value() }
                        label { "Required Skills" }
                        div { class: "add",
                            input {
                                class: "text",
                                placeholder: "Add a skill",
                                value: "{form.read().skill_input}",
                                oninput: move |e| form.write().skill_input = e.value(),
                                onkeydown: move |e: KeyboardEvent| {
                                    if e.key() == Key::Enter {
                                        e.prevent_default();
                                        add_skill();
                                    }
                                },
                            }
                            button { class: "btn btn-ghost", r#type: "button", onclick: move |_| add_skill(), "Add" }
                        }
                        div { class: "chips",
                            for skill in form.read().skills.clone() {
                                span { key: "{skill}", class: "chip",
                                    "{skill}"
                                    button {
                                        class: "chip-remove",
                                        r#type: "button",
                                        onclick: move |_| form.write().remove_skill(&skill),
                                        "✕"
                                    }
                                }
                            }
                        }
                        div { class: "actions",
                            button { class: "btn btn-ghost", r#type: "button", onclick: move |_| open.set(false), "Cancel" }
                            button { class: "btn btn-primary", r#type: "submit", disabled: !can_submit, "Post Job" }
                        }
                    }
                }
            }
        }
    }
}
