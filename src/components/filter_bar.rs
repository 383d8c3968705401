use dioxus::prelude::*;

use crate::format::naira;
use crate::market::{BudgetRange, CategoryFilter, SortKey, BUDGET_MAX, BUDGET_STEP};

#[component]
pub fn FilterBar(
    category: CategoryFilter,
    budget: BudgetRange,
    sort: SortKey,
    on_category: EventHandler<CategoryFilter>,
    on_budget: EventHandler<BudgetRange>,
    on_sort: EventHandler<SortKey>,
) -> Element {
    rsx! {
        div { class: "filters",
            div { class: "tabs",
                for opt in CategoryFilter::options() {
                    button {
                        key: "{opt.value()}",
                        class: if opt == category { "tab active" } else { "tab" },
                        onclick: move |_| on_category.call(opt),
                        "{opt.label()}"
                    }
                }
            }
            div { class: "range",
                span { class: "meta", "Budget: {naira(budget.min())} - {naira(budget.max())}" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{BUDGET_MAX}",
                    step: "{BUDGET_STEP}",
                    value: "{budget.min()}",
                    oninput: move |e: FormEvent| {
                        if let Ok(v) = e.value().parse::<u64>() {
                            on_budget.call(budget.with_min(v));
                        }
                    },
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{BUDGET_MAX}",
                    step: "{BUDGET_STEP}",
                    value: "{budget.max()}",
                    oninput: move |e: FormEvent| {
                        if let Ok(v) = e.value().parse::<u64>() {
                            on_budget.call(budget.with_max(v));
                        }
                    },
                }
            }
            select {
                class: "text sort",
                value: "{sort.value()}",
                onchange: move |e: FormEvent| {
                    if let Ok(key) = e.value().parse::<SortKey>() {
                        on_sort.call(key);
                    }
                },
                for key in SortKey::ALL {
                    option { key: "{key.value()}", value: "{key.value()}", selected: key == sort, "{key.label()}" }
                }
            }
        }
    }
}
