use log::{error, info};
use validator::Validate;

use super::not_blank;
use crate::auth::AuthProvider;
use crate::error::FormError;
use crate::models::{AccountType, Education, ProfileDraft, Qualification, SubscriptionTier, User};

pub const OTHERS: &str = "Others";

pub const GUEST_NOTICE: &str = "You've registered as a guest user. You can only post tasks but cannot access other platform features. Upgrade anytime to access all features.";
pub const FULL_NOTICE: &str = "Registration successful! Please check your email to verify your account.";

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "not_blank", message = "Full name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Phone number is required"))]
    pub phone: String,
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
    pub confirm_password: String,
    #[validate(custom(function = "not_blank", message = "Location is required"))]
    pub location: String,
    #[validate(custom(function = "not_blank", message = "National ID/BVN is required"))]
    pub national_id: String,
    #[validate(custom(function = "not_blank", message = "Institution is required"))]
    pub institution: String,
    #[validate(custom(function = "not_blank", message = "Course of study is required"))]
    pub course_of_study: String,
    pub highest_qualification: Option<Qualification>,
    pub skills: Vec<String>,
    pub other_skills: String,
    pub skills_to_learn: Vec<String>,
    pub other_skills_to_learn: String,
    pub account_type: AccountType,
    pub subscription_tier: SubscriptionTier,
    pub profile_image: Option<String>,
    pub accepted_terms: bool,
}

/// Where the app goes after a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Dashboard,
    PostTask,
}

impl NextStep {
    pub fn notice(&self) -> &'static str {
        match self {
            NextStep::Dashboard => FULL_NOTICE,
            NextStep::PostTask => GUEST_NOTICE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registered {
    pub user: User,
    pub next: NextStep,
}

fn toggle(list: &mut Vec<String>, skill: &str) {
    if let Some(pos) = list.iter().position(|s| s == skill) {
        list.remove(pos);
    } else {
        list.push(skill.to_string());
    }
}

/// Checked skills with "Others" swapped for the comma separated free text.
fn merge_others(checked: &[String], others: &str) -> Vec<String> {
    let mut out: Vec<String> = checked.iter().filter(|s| *s != OTHERS).cloned().collect();
    if checked.iter().any(|s| s == OTHERS) {
        for extra in others.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !out.iter().any(|s| s == extra) {
                out.push(extra.to_string());
            }
        }
    }
    out
}

impl RegisterForm {
    pub fn toggle_skill(&mut self, skill: &str) {
        toggle(&mut self.skills, skill);
    }

    pub fn toggle_skill_to_learn(&mut self, skill: &str) {
        toggle(&mut self.skills_to_learn, skill);
    }

    /// Guests post tasks only, so they never pick a membership tier.
    pub fn shows_subscription_tiers(&self) -> bool {
        self.account_type == AccountType::Full
    }

    pub fn shows_other_skills(&self) -> bool {
        self.skills.iter().any(|s| s == OTHERS)
    }

    pub fn shows_other_skills_to_learn(&self) -> bool {
        self.skills_to_learn.iter().any(|s| s == OTHERS)
    }

    pub fn avatar_letter(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }

    /// Local checks, in the order the user is told about them.
    pub fn check(&self) -> Result<(), FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::Validation("Passwords do not match".into()));
        }
        self.validate()?;
        if !self.accepted_terms {
            return Err(FormError::Validation(
                "Please agree to the Terms of Service and Privacy Policy".into(),
            ));
        }
        Ok(())
    }

    pub fn to_profile(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            location: self.location.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            skills: merge_others(&self.skills, &self.other_skills),
            skills_to_learn: merge_others(&self.skills_to_learn, &self.other_skills_to_learn),
            education: Education {
                institution: self.institution.trim().to_string(),
                course_of_study: self.course_of_study.trim().to_string(),
                highest_qualification: self.highest_qualification,
            },
            subscription_tier: self.shows_subscription_tiers().then_some(self.subscription_tier),
            account_type: self.account_type,
            profile_image: self.profile_image.clone(),
        }
    }
}

pub async fn submit_register<A: AuthProvider>(auth: &A, form: &RegisterForm) -> Result<Registered, FormError> {
    form.check()?;
    let profile = form.to_profile();
    let user = auth
        .sign_up(&profile.email, &form.password, &profile)
        .await
        .map_err(FormError::from)
        .inspect_err(|e| {
            if let FormError::Unexpected(detail) = e {
                error!("[Register] Registration error: {detail}");
            }
        })?;
    let next = match form.account_type {
        AccountType::Guest => NextStep::PostTask,
        AccountType::Full => NextStep::Dashboard,
    };
    info!("[Register] Created {:?} account for {}", form.account_type, user.email);
    Ok(Registered { user, next })
}

pub fn failure_message(err: &FormError) -> String {
    match err {
        FormError::Validation(msg) => msg.clone(),
        FormError::Rejected(msg) => format!("Registration failed: {msg}"),
        FormError::Unexpected(_) => "An error occurred during registration".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> RegisterForm {
        RegisterForm {
            name: "Ada Obi".into(),
            email: "ada@example.com".into(),
            phone: "+234 800 000 0000".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            location: "Lagos, Lagos".into(),
            national_id: "12345678901".into(),
            institution: "UNILAG".into(),
            course_of_study: "Computer Science".into(),
            accepted_terms: true,
            ..Default::default()
        }
    }

    #[test]
    fn mismatch_is_reported_first() {
        let form = RegisterForm { confirm_password: "other".into(), name: String::new(), ..filled() };
        assert_eq!(form.check(), Err(FormError::Validation("Passwords do not match".into())));
    }

    #[test]
    fn blank_required_fields_block() {
        let form = RegisterForm { national_id: "   ".into(), ..filled() };
        assert_eq!(form.check(), Err(FormError::Validation("National ID/BVN is required".into())));
    }

    #[test]
    fn terms_must_be_accepted() {
        let form = RegisterForm { accepted_terms: false, ..filled() };
        assert!(matches!(form.check(), Err(FormError::Validation(_))));
        assert_eq!(filled().check(), Ok(()));
    }

    #[test]
    fn guests_skip_the_tier_choice() {
        let mut form = filled();
        form.subscription_tier = SubscriptionTier::Executive;
        assert!(form.shows_subscription_tiers());
        assert_eq!(form.to_profile().subscription_tier, Some(SubscriptionTier::Executive));

        form.account_type = AccountType::Guest;
        assert!(!form.shows_subscription_tiers());
        assert_eq!(form.to_profile().subscription_tier, None);
    }

    #[test]
    fn others_free_text_replaces_the_checkbox() {
        let mut form = filled();
        form.toggle_skill("Tutoring");
        form.toggle_skill(OTHERS);
        assert!(form.shows_other_skills());
        form.other_skills = "UI/UX Design, , Project Management, Tutoring".into();
        assert_eq!(form.to_profile().skills, vec!["Tutoring", "UI/UX Design", "Project Management"]);

        form.toggle_skill(OTHERS);
        assert!(!form.shows_other_skills());
        assert_eq!(form.to_profile().skills, vec!["Tutoring"]);
    }

    #[test]
    fn avatar_letter_falls_back_to_u() {
        assert_eq!(filled().avatar_letter(), "A");
        assert_eq!(RegisterForm::default().avatar_letter(), "U");
    }

    #[test]
    fn failure_copy() {
        assert_eq!(
            failure_message(&FormError::Rejected("User already registered".into())),
            "Registration failed: User already registered"
        );
        assert_eq!(
            failure_message(&FormError::Unexpected("boom".into())),
            "An error occurred during registration"
        );
    }
}
