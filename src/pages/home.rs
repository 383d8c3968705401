use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::app::Route;
use crate::components::image_slider::ImageSlider;
use crate::format::naira;
use crate::mock;
use crate::models::Category;
use crate::state::{AppState, AuthState};

const STATS: [(&str, &str); 4] = [
    ("10,000+", "Active Users"),
    ("5,000+", "Tasks Completed"),
    ("₦50M+", "Paid to Freelancers"),
    ("36", "States Covered"),
];

const PLANS: [(&str, &str, &[&str]); 2] = [
    ("Ordinary", "₦1,000/year", &["Bid on tasks", "Post tasks", "Basic profile"]),
    (
        "Executive",
        "₦5,000/year",
        &["Everything in Ordinary", "Priority listing", "Verified badge", "Dedicated support"],
    ),
];

fn category_blurb(c: Category) -> &'static str {
    match c {
        Category::Digital => "Web development, data entry and everything online",
        Category::Creative => "Design, photography, writing and video",
        Category::Domestic => "Cleaning, cooking and help around the home",
        Category::Academic => "Tutoring, lessons and exam preparation",
        Category::Professional => "Legal, accounting and consulting",
        Category::Business => "Marketing, sales and business support",
    }
}

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let auth = use_context::<AuthState>();
    let nav = use_navigator();
    let signed_in = state.user.read().is_some();
    let app_name = auth.config.app_name.clone();

    let get_started = move |_| {
        if signed_in {
            nav.push(Route::Dashboard {});
        } else {
            nav.push(Route::Register {});
        }
    };

    rsx! {
        section { class: "hero",
            h1 { class: "title", "Find Work. Get Things Done." }
            p { class: "meta", "{app_name} connects Nigerians who need tasks done with skilled people ready to do them." }
            div { class: "actions",
                button { class: "btn btn-primary", onclick: get_started, "Get Started" }
                Link { class: "btn btn-ghost", to: Route::Marketplace {}, "Browse Tasks" }
            }
        }
        section { class: "stats",
            for (value, label) in STATS {
                div { key: "{label}", class: "stat card",
                    div { class: "stat-value", "{value}" }
                    div { class: "meta", "{label}" }
                }
            }
        }
        section {
            h2 { class: "title", "Service Categories" }
            div { class: "grid three",
                for c in Category::ALL {
                    Link { key: "{c}", class: "card category", to: Route::Marketplace {},
                        h3 { "{c}" }
                        p { class: "meta", "{category_blurb(c)}" }
                    }
                }
            }
        }
        section {
            h2 { class: "title", "Featured Tasks" }
            div { class: "grid three",
                for task in mock::featured_tasks() {
                    div { key: "{task.id}", class: "card",
                        span { class: "badge", "{task.category}" }
                        h3 { "{task.title}" }
                        p { class: "meta clamp", "{task.description}" }
                        div { class: "row between",
                            span { class: "budget", "{naira(task.budget)}" }
                            Link { class: "btn btn-ghost", to: Route::TaskDetail { id: task.id.clone() }, "View" }
                        }
                    }
                }
            }
        }
        section {
            h2 { class: "title", "Membership Plans" }
            div { class: "grid two",
                for (name, price, perks) in PLANS {
                    div { key: "{name}", class: "card plan",
                        h3 { "{name}" }
                        div { class: "stat-value", "{price}" }
                        ul {
                            for perk in perks.iter() {
                                li { key: "{perk}", "✓ {perk}" }
                            }
                        }
                        Link { class: "btn btn-primary", to: Route::Register {}, "Choose {name}" }
                    }
                }
            }
        }
        section { ImageSlider {} }
        section { class: "cta card",
            h2 { class: "title", "Ready to get started?" }
            p { class: "meta", "Join {app_name} today and start earning or getting your tasks done." }
            Link { class: "btn btn-primary", to: Route::Register {}, "Create an Account" }
        }
    }
}
