//! Bundled sample records standing in for a backing store.
//!
//! Tasks and bids ship as JSON under `assets/mock/` and are decoded once on first
//! use. A decode failure is logged and leaves the collection empty.

use chrono::{Duration, Utc};
use lazy_static::lazy_static;
use log::error;
use serde::de::DeserializeOwned;

use crate::models::{Bid, Message, Sender, Task};

const TASKS_JSON: &str = include_str!("../assets/mock/tasks.json");
const BIDS_JSON: &str = include_str!("../assets/mock/bids.json");

lazy_static! {
    static ref TASKS: Vec<Task> = decode("tasks", TASKS_JSON);
    static ref BIDS: Vec<Bid> = decode("bids", BIDS_JSON);
}

fn decode<T: DeserializeOwned>(what: &str, raw: &str) -> Vec<T> {
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(list) => list,
        Err(e) => {
            error!("[Mock] Failed to decode {what}: {e}");
            Vec::new()
        }
    }
}

pub fn tasks() -> &'static [Task] {
    &TASKS
}

pub fn find_task(id: &str) -> Option<&'static Task> {
    TASKS.iter().find(|t| t.id == id)
}

pub fn bids_for(task_id: &str) -> Vec<Bid> {
    BIDS.iter().filter(|b| b.task_id == task_id).cloned().collect()
}

/// Three highest-budget tasks for the landing page.
pub fn featured_tasks() -> Vec<Task> {
    let mut list = TASKS.clone();
    list.sort_by(|a, b| b.budget.cmp(&a.budget));
    list.truncate(3);
    list
}

/// Opening conversation after a bid was accepted, timestamped relative to now.
pub fn seed_conversation() -> Vec<Message> {
    let now = Utc::now();
    let lines = [
        (60, Sender::Counterpart, "Hello! I've accepted your bid for the website development task."),
        (58, Sender::Counterpart, "When can you start working on it?"),
        (50, Sender::User, "Hi! Thank you for accepting my bid. I can start working on it right away."),
        (48, Sender::User, "I'll prepare a project timeline and share it with you by tomorrow."),
        (46, Sender::Counterpart, "That sounds great! Looking forward to it."),
    ];
    lines
        .into_iter()
        .enumerate()
        .map(|(i, (mins_ago, sender, text))| Message {
            id: (i + 1).to_string(),
            sender,
            content: text.to_string(),
            timestamp: now - Duration::minutes(mins_ago),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub url: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub const SLIDES: [Slide; 5] = [
    Slide {
        url: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?w=800&q=80",
        alt: "People collaborating",
        caption: "Connect with talented professionals",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1521737711867-e3b97375f902?w=800&q=80",
        alt: "Cheerful youths working together",
        caption: "Empowering youth with opportunities",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1560439514-4e9645039924?w=800&q=80",
        alt: "Business partners shaking hands",
        caption: "Building successful partnerships",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=800&q=80",
        alt: "Domestic workers",
        caption: "Quality domestic services at your fingertips",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&q=80",
        alt: "Team collaboration",
        caption: "Collaborate on projects that matter",
    },
];

/// Skill checklist offered during registration.
pub const SKILLS: [&str; 13] = [
    "Web Development",
    "Graphic Design",
    "Content Writing",
    "Digital Marketing",
    "Data Entry",
    "Virtual Assistant",
    "Tutoring",
    "Translation",
    "Accounting",
    "Legal Services",
    "Domestic Services",
    "Delivery",
    "Others",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_decodes() {
        assert_eq!(tasks().len(), 6);
        assert_eq!(bids_for("1").len(), 2);
        assert!(bids_for("3").is_empty());
        assert_eq!(find_task("3").map(|t| t.title.as_str()), Some("Home Cleaning Service"));
    }

    #[test]
    fn featured_is_top_three_by_budget() {
        let budgets: Vec<u64> = featured_tasks().iter().map(|t| t.budget).collect();
        assert_eq!(budgets, vec![50000, 25000, 18000]);
    }

    #[test]
    fn conversation_is_chronological() {
        let msgs = seed_conversation();
        assert!(msgs.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }
}
