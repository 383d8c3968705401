use dioxus::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::task_card::TaskCard;
use crate::market::{visible_tasks, BudgetRange, CategoryFilter, SortKey, TaskQuery};
use crate::mock;

#[component]
pub fn Marketplace() -> Element {
    let mut query = use_signal(TaskQuery::default);
    let mut sort = use_signal(SortKey::default);

    let visible = use_memo(move || visible_tasks(mock::tasks(), &query.read(), *sort.read()));

    let q = query.read().clone();
    let list = visible.read().clone();
    let count = list.len();

    rsx! {
        div { class: "card",
            div { class: "row between",
                h2 { class: "title", "Task Marketplace" }
                span { class: "meta", "{count} tasks" }
            }
            input {
                class: "text search",
                r#type: "search",
                placeholder: "Search tasks...",
                value: "{q.text}",
                oninput: move |e| query.write().text = e.value(),
            }
            FilterBar {
                category: q.category,
                budget: q.budget,
                sort: *sort.read(),
                on_category: move |c: CategoryFilter| query.write().category = c,
                on_budget: move |b: BudgetRange| query.write().budget = b,
                on_sort: move |k: SortKey| sort.set(k),
            }
            if list.is_empty() {
                div { class: "empty",
                    h3 { "No tasks found" }
                    p { class: "meta", "Try adjusting your search or filters to find what you're looking for." }
                }
            } else {
                ul { class: "grid two list",
                    for task in list.into_iter() {
                        TaskCard { key: "{task.id}", task: task.clone() }
                    }
                }
            }
        }
    }
}
