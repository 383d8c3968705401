//! Marketplace search: filter the task list by text, category and budget, then order it.

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Task, UnknownVariant};

pub const BUDGET_MAX: u64 = 100_000;
pub const BUDGET_STEP: u64 = 1_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    /// Every selectable option, "all" first.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Newest, SortKey::Oldest, SortKey::Highest, SortKey::Lowest];

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Highest => "highest",
            SortKey::Lowest => "lowest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::Highest => "Highest Budget",
            SortKey::Lowest => "Lowest Budget",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for SortKey {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.value() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Inclusive budget window. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    min: u64,
    max: u64,
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self { min: 0, max: BUDGET_MAX }
    }
}

impl BudgetRange {
    pub fn new(a: u64, b: u64) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn contains(&self, amount: u64) -> bool {
        self.min <= amount && amount <= self.max
    }

    /// Move the lower handle; it pushes the upper one along if it crosses it.
    pub fn with_min(self, min: u64) -> Self {
        Self { min, max: self.max.max(min) }
    }

    /// Move the upper handle; it pushes the lower one along if it crosses it.
    pub fn with_max(self, max: u64) -> Self {
        Self { min: self.min.min(max), max }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub budget: BudgetRange,
}

impl TaskQuery {
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.text.to_lowercase();
        let text_hit = task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle);
        text_hit && self.category.admits(task.category) && self.budget.contains(task.budget)
    }
}

/// Stable: tasks with equal keys keep their catalogue order.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::Newest => tasks.sort_by(|a, b| b.deadline.cmp(&a.deadline)),
        SortKey::Oldest => tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        SortKey::Highest => tasks.sort_by(|a, b| b.budget.cmp(&a.budget)),
        SortKey::Lowest => tasks.sort_by(|a, b| a.budget.cmp(&b.budget)),
    }
}

pub fn visible_tasks(all: &[Task], query: &TaskQuery, key: SortKey) -> Vec<Task> {
    let mut out: Vec<Task> = all.iter().filter(|t| query.matches(t)).cloned().collect();
    sort_tasks(&mut out, key);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use pretty_assertions::assert_eq;

    fn titles(list: &[Task]) -> Vec<&str> {
        list.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn text_search_is_case_insensitive_over_title_and_description() {
        let q = TaskQuery { text: "WEBSITE".into(), ..Default::default() };
        let out = visible_tasks(mock::tasks(), &q, SortKey::Newest);
        assert_eq!(titles(&out), vec!["Website Development for Local Business"]);

        let q = TaskQuery { text: "restaurant".into(), ..Default::default() };
        let out = visible_tasks(mock::tasks(), &q, SortKey::Newest);
        assert_eq!(titles(&out), vec!["Social Media Management for Small Business"]);
    }

    #[test]
    fn category_domestic_default_range() {
        let q = TaskQuery { category: "Domestic".parse().unwrap(), ..Default::default() };
        let out = visible_tasks(mock::tasks(), &q, SortKey::Newest);
        assert_eq!(titles(&out), vec!["Home Cleaning Service"]);
    }

    #[test]
    fn budget_bounds_are_inclusive() {
        let q = TaskQuery { budget: BudgetRange::new(12000, 18000), ..Default::default() };
        let out = visible_tasks(mock::tasks(), &q, SortKey::Lowest);
        let budgets: Vec<u64> = out.iter().map(|t| t.budget).collect();
        assert_eq!(budgets, vec![12000, 15000, 18000]);
    }

    #[test]
    fn deadline_orders() {
        let q = TaskQuery::default();
        let newest = visible_tasks(mock::tasks(), &q, SortKey::Newest);
        assert_eq!(newest.first().map(|t| t.id.as_str()), Some("1"));
        assert_eq!(newest.last().map(|t| t.id.as_str()), Some("5"));

        let oldest = visible_tasks(mock::tasks(), &q, SortKey::Oldest);
        let ids: Vec<&str> = oldest.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "3", "2", "6", "4", "1"]);
    }

    #[test]
    fn equal_keys_keep_catalogue_order() {
        let mut list: Vec<Task> = mock::tasks().to_vec();
        for t in list.iter_mut() {
            t.budget = 1000;
        }
        let before: Vec<String> = list.iter().map(|t| t.id.clone()).collect();
        sort_tasks(&mut list, SortKey::Highest);
        let after: Vec<String> = list.iter().map(|t| t.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let q = TaskQuery { text: "plumbing".into(), ..Default::default() };
        assert!(visible_tasks(mock::tasks(), &q, SortKey::Newest).is_empty());
    }

    #[test]
    fn slider_handles_never_cross() {
        let r = BudgetRange::default().with_max(20000).with_min(30000);
        assert_eq!((r.min(), r.max()), (30000, 30000));
        let r = BudgetRange::new(50000, 10000);
        assert_eq!((r.min(), r.max()), (10000, 50000));
        let r = BudgetRange::new(10000, 50000).with_max(5000);
        assert_eq!((r.min(), r.max()), (5000, 5000));
    }

    #[test]
    fn option_strings_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(key.value().parse::<SortKey>(), Ok(key));
        }
        let values: Vec<&str> = CategoryFilter::options().map(|c| c.value()).collect();
        assert_eq!(values, vec!["all", "Digital", "Creative", "Domestic", "Academic", "Professional", "Business"]);
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    }
}
