//! Authentication collaborator.
//!
//! Pages only see [`AuthProvider`]; which backend answers is decided once at
//! start-up from [`Config`](crate::config::Config). A GoTrue-compatible REST
//! service is used when configured, otherwise an in-process account registry.

mod local;
mod remote;

pub use local::{LocalAuth, DEMO_EMAIL, DEMO_PASSWORD};
pub use remote::RemoteAuth;

use std::fmt;

use crate::config::{AuthBackend, Config};
use crate::models::{ProfileDraft, User};

#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Refused by the provider; the message is meant for the user as-is.
    Rejected(String),
    /// The provider could not be reached or answered with a server error.
    Transport(String),
    /// Anything else, e.g. an undecodable reply.
    Internal(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::Rejected(msg) => write!(f, "{}", msg),
            AuthError::Transport(msg) => write!(f, "Transport Error: {}", msg),
            AuthError::Internal(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;
    async fn sign_up(&self, email: &str, password: &str, profile: &ProfileDraft) -> Result<User, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// The provider handed to pages through context.
#[derive(Clone)]
pub enum AuthClient {
    Remote(RemoteAuth),
    Local(LocalAuth),
}

impl AuthClient {
    pub fn from_config(config: &Config) -> Self {
        match config.auth_backend() {
            AuthBackend::Remote { url, anon_key } => {
                log::info!("[Auth] Using remote provider at {url}");
                AuthClient::Remote(RemoteAuth::new(url, anon_key))
            }
            AuthBackend::Local => {
                log::info!("[Auth] No remote provider configured, using local accounts (demo: {DEMO_EMAIL})");
                AuthClient::Local(LocalAuth::with_demo_account())
            }
        }
    }
}

impl AuthProvider for AuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self {
            AuthClient::Remote(r) => r.sign_in(email, password).await,
            AuthClient::Local(l) => l.sign_in(email, password).await,
        }
    }

    async fn sign_up(&self, email: &str, password: &str, profile: &ProfileDraft) -> Result<User, AuthError> {
        match self {
            AuthClient::Remote(r) => r.sign_up(email, password, profile).await,
            AuthClient::Local(l) => l.sign_up(email, password, profile).await,
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        match self {
            AuthClient::Remote(r) => r.sign_out().await,
            AuthClient::Local(l) => l.sign_out().await,
        }
    }
}
