pub mod auth;
pub mod dashboard;
pub mod home;
pub mod marketplace;
pub mod messages;
pub mod post_task;
pub mod settings;
pub mod task_detail;
