use deals_ng::market::{visible_tasks, BudgetRange, CategoryFilter, SortKey, TaskQuery};
use deals_ng::mock;
use deals_ng::models::Category;
use pretty_assertions::assert_eq;

fn titles(query: &TaskQuery, key: SortKey) -> Vec<String> {
    visible_tasks(mock::tasks(), query, key).into_iter().map(|t| t.title).collect()
}

#[test]
fn website_query_finds_one_task() {
    let query = TaskQuery { text: "website".into(), ..Default::default() };
    assert_eq!(titles(&query, SortKey::Newest), vec!["Website Development for Local Business"]);
}

#[test]
fn domestic_category_finds_cleaning() {
    let query = TaskQuery { category: CategoryFilter::Only(Category::Domestic), ..Default::default() };
    assert_eq!(titles(&query, SortKey::Newest), vec!["Home Cleaning Service"]);
}

#[test]
fn result_matches_predicate_for_every_task() {
    let queries = [
        TaskQuery::default(),
        TaskQuery { text: "BUSINESS".into(), ..Default::default() },
        TaskQuery { budget: BudgetRange::new(10_000, 20_000), ..Default::default() },
        TaskQuery {
            text: "e".into(),
            category: CategoryFilter::Only(Category::Digital),
            budget: BudgetRange::new(0, 40_000),
        },
    ];
    for query in &queries {
        let shown = visible_tasks(mock::tasks(), query, SortKey::Newest);
        for task in mock::tasks() {
            let needle = query.text.to_lowercase();
            let expected = (task.title.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle))
                && query.category.admits(task.category)
                && query.budget.min() <= task.budget
                && task.budget <= query.budget.max();
            assert_eq!(shown.iter().any(|t| t.id == task.id), expected, "task {} under {:?}", task.id, query);
        }
    }
}

#[test]
fn lowest_and_highest_are_reverses() {
    let query = TaskQuery::default();
    let low: Vec<u64> = visible_tasks(mock::tasks(), &query, SortKey::Lowest).iter().map(|t| t.budget).collect();
    let mut high: Vec<u64> = visible_tasks(mock::tasks(), &query, SortKey::Highest).iter().map(|t| t.budget).collect();
    high.reverse();
    assert_eq!(low, high);
}

#[test]
fn nothing_matches_gives_empty_list() {
    let query = TaskQuery { text: "plumbing".into(), ..Default::default() };
    assert!(visible_tasks(mock::tasks(), &query, SortKey::Oldest).is_empty());
}
