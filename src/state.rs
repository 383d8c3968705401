use dioxus::prelude::*;

use crate::auth::AuthClient;
use crate::config::Config;
use crate::models::{JobPosting, Settings, User};

#[derive(Clone, Copy)]
pub struct AppState {
    pub user: Signal<Option<User>>,
    pub settings: Signal<Settings>,
    pub postings: Signal<Vec<JobPosting>>,
}

#[derive(Clone)]
pub struct AuthState {
    pub client: AuthClient,
    pub config: Config,
}

#[derive(Clone, Copy)]
pub struct FlashState {
    pub msg: Signal<Option<String>>,
}

impl FlashState {
    pub fn show(&mut self, msg: impl Into<String>) {
        self.msg.set(Some(msg.into()));
    }
}
