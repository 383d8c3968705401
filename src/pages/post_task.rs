use dioxus::prelude::*;

use crate::components::job_form::JobPostingDialog;
use crate::format::short_date;
use crate::models::JobPosting;
use crate::state::AppState;

#[component]
pub fn PostTask() -> Element {
    let state = use_context::<AppState>();
    let mut postings = state.postings;
    let list = postings.read().clone();

    rsx! {
        div { class: "card",
            div { class: "row between",
                div {
                    h2 { class: "title", "Post a Task" }
                    p { class: "meta", "Describe the job and the skills it needs. Freelancers will start bidding." }
                }
                JobPostingDialog { on_posted: move |p: JobPosting| postings.write().insert(0, p) }
            }
            if list.is_empty() {
                p { class: "meta empty", "You haven't posted any jobs yet." }
            }
            ul { class: "list",
                for p in list.into_iter() {
                    li { key: "{p.id}", class: "list-item",
                        div { class: "content",
                            div { class: "item-title", "{p.title}" }
                            div { class: "meta", "{p.company} · {p.location} · {p.job_type.label()}" }
                            p { class: "clamp", "{p.description}" }
                            div { class: "chips",
                                for skill in p.skills.iter() {
                                    span { key: "{skill}", class: "chip", "{skill}" }
                                }
                            }
                        }
                        span { class: "meta", "Posted {short_date(p.posted_at.date_naive())}" }
                    }
                }
            }
        }
    }
}
