use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};
use uuid::Uuid;

use super::{AuthError, AuthProvider};
use crate::models::{ProfileDraft, User};

pub const DEMO_EMAIL: &str = "john@deals.ng";
pub const DEMO_PASSWORD: &str = "password123";

// bcrypt cost for in-memory accounts
const HASH_COST: u32 = 6;
const MIN_PASSWORD_LEN: usize = 6;

struct Account {
    user: User,
    password_hash: String,
}

/// In-memory account registry used when no remote provider is configured.
#[derive(Clone, Default)]
pub struct LocalAuth {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
}

impl LocalAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the poster of the first marketplace task so bid decisions can be tried out.
    pub fn with_demo_account() -> Self {
        let auth = Self::new();
        match bcrypt::hash(DEMO_PASSWORD, HASH_COST) {
            Ok(password_hash) => {
                if let Ok(mut accounts) = auth.accounts.lock() {
                    let user = User { id: "client-john".into(), email: DEMO_EMAIL.into(), name: "John Doe".into() };
                    accounts.insert(DEMO_EMAIL.into(), Account { user, password_hash });
                }
            }
            Err(e) => warn!("[Auth] Could not seed demo account: {e}"),
        }
        auth
    }

    fn accounts(&self) -> Result<MutexGuard<'_, HashMap<String, Account>>, AuthError> {
        self.accounts.lock().map_err(|_| AuthError::Internal("account store poisoned".into()))
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AuthProvider for LocalAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let accounts = self.accounts()?;
        let Some(account) = accounts.get(&normalize(email)) else {
            return Err(AuthError::Rejected("Invalid login credentials".into()));
        };
        let ok = bcrypt::verify(password, &account.password_hash).map_err(|e| AuthError::Internal(e.to_string()))?;
        if !ok {
            return Err(AuthError::Rejected("Invalid login credentials".into()));
        }
        Ok(account.user.clone())
    }

    async fn sign_up(&self, email: &str, password: &str, profile: &ProfileDraft) -> Result<User, AuthError> {
        let key = normalize(email);
        if key.is_empty() {
            return Err(AuthError::Rejected("Email is required".into()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Rejected(format!(
                "Password should be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        let password_hash = bcrypt::hash(password, HASH_COST).map_err(|e| AuthError::Internal(e.to_string()))?;

        let mut accounts = self.accounts()?;
        if accounts.contains_key(&key) {
            return Err(AuthError::Rejected("User already registered".into()));
        }
        let name = if profile.name.trim().is_empty() { key.clone() } else { profile.name.trim().to_string() };
        let user = User { id: Uuid::new_v4().to_string(), email: key.clone(), name };
        accounts.insert(key, Account { user: user.clone(), password_hash });
        info!("[Auth] Registered local account {} ({:?})", user.email, profile.account_type);
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn profile(name: &str) -> ProfileDraft {
        ProfileDraft { name: name.into(), ..Default::default() }
    }

    #[test]
    fn demo_account_signs_in() {
        let auth = LocalAuth::with_demo_account();
        let user = block_on(auth.sign_in(" John@Deals.ng ", DEMO_PASSWORD)).unwrap();
        assert_eq!(user.id, "client-john");
        assert_eq!(
            block_on(auth.sign_in(DEMO_EMAIL, "wrong")),
            Err(AuthError::Rejected("Invalid login credentials".into()))
        );
    }

    #[test]
    fn sign_up_then_sign_in() {
        let auth = LocalAuth::new();
        let created = block_on(auth.sign_up("ada@example.com", "secret1", &profile("Ada"))).unwrap();
        assert_eq!(created.name, "Ada");
        let again = block_on(auth.sign_in("ada@example.com", "secret1")).unwrap();
        assert_eq!(again, created);
    }

    #[test]
    fn duplicate_and_weak_sign_ups_are_rejected() {
        let auth = LocalAuth::new();
        block_on(auth.sign_up("ada@example.com", "secret1", &profile("Ada"))).unwrap();
        assert_eq!(
            block_on(auth.sign_up("ADA@example.com", "secret2", &profile("Ada"))),
            Err(AuthError::Rejected("User already registered".into()))
        );
        assert!(matches!(
            block_on(auth.sign_up("bob@example.com", "123", &profile("Bob"))),
            Err(AuthError::Rejected(_))
        ));
    }

    #[test]
    fn unknown_email_is_rejected() {
        let auth = LocalAuth::new();
        assert!(matches!(block_on(auth.sign_in("nobody@example.com", "x")), Err(AuthError::Rejected(_))));
    }
}
