pub mod app;
pub mod app_assets;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod market;
pub mod mock;
pub mod models;
pub mod pages;
pub mod state;
pub mod storage;

pub use app::App;
pub use app::Route;
