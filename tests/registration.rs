use std::cell::Cell;

use deals_ng::auth::{AuthError, AuthProvider};
use deals_ng::error::FormError;
use deals_ng::forms::register::{submit_register, NextStep, RegisterForm, GUEST_NOTICE};
use deals_ng::models::{AccountType, ProfileDraft, SubscriptionTier, User};
use futures::executor::block_on;
use pretty_assertions::assert_eq;

#[derive(Default)]
struct CountingAuth {
    sign_ups: Cell<usize>,
    last_profile: Cell<Option<ProfileDraft>>,
}

impl AuthProvider for CountingAuth {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<User, AuthError> {
        Err(AuthError::Rejected("not used".into()))
    }

    async fn sign_up(&self, email: &str, _password: &str, profile: &ProfileDraft) -> Result<User, AuthError> {
        self.sign_ups.set(self.sign_ups.get() + 1);
        self.last_profile.set(Some(profile.clone()));
        Ok(User { id: "u-1".into(), email: email.into(), name: profile.name.clone() })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

fn filled() -> RegisterForm {
    RegisterForm {
        name: "Chioma Nwosu".into(),
        email: "chioma@example.com".into(),
        phone: "08030000000".into(),
        password: "hunter22".into(),
        confirm_password: "hunter22".into(),
        location: "Enugu, Enugu".into(),
        national_id: "22222222222".into(),
        institution: "UNN".into(),
        course_of_study: "Economics".into(),
        accepted_terms: true,
        ..Default::default()
    }
}

#[test]
fn mismatched_passwords_never_reach_the_provider() {
    let auth = CountingAuth::default();
    let form = RegisterForm { confirm_password: "hunter23".into(), ..filled() };
    let err = block_on(submit_register(&auth, &form)).unwrap_err();
    assert_eq!(err, FormError::Validation("Passwords do not match".into()));
    assert_eq!(auth.sign_ups.get(), 0);
}

#[test]
fn guest_goes_to_task_posting_without_a_tier() {
    let auth = CountingAuth::default();
    let form = RegisterForm {
        account_type: AccountType::Guest,
        subscription_tier: SubscriptionTier::Executive,
        ..filled()
    };
    assert!(!form.shows_subscription_tiers());
    let done = block_on(submit_register(&auth, &form)).unwrap();
    assert_eq!(done.next, NextStep::PostTask);
    assert_eq!(done.next.notice(), GUEST_NOTICE);
    assert_eq!(auth.sign_ups.get(), 1);
    let profile = auth.last_profile.take().unwrap();
    assert_eq!(profile.subscription_tier, None);
}

#[test]
fn full_account_goes_to_dashboard() {
    let auth = CountingAuth::default();
    let done = block_on(submit_register(&auth, &filled())).unwrap();
    assert_eq!(done.next, NextStep::Dashboard);
    assert_eq!(done.user.email, "chioma@example.com");
}
