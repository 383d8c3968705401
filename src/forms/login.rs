use log::{error, info};
use validator::Validate;

use super::not_blank;
use crate::auth::AuthProvider;
use crate::error::FormError;
use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
}

pub async fn submit_login<A: AuthProvider>(auth: &A, form: &LoginForm) -> Result<User, FormError> {
    form.validate()?;
    match auth.sign_in(form.email.trim(), &form.password).await {
        Ok(user) => {
            info!("[Login] Signed in as {}", user.email);
            Ok(user)
        }
        Err(e) => {
            let e = FormError::from(e);
            if let FormError::Unexpected(detail) = &e {
                error!("[Login] Login error: {detail}");
            }
            Err(e)
        }
    }
}

/// Copy shown to the user for a failed login.
pub fn failure_message(err: &FormError) -> String {
    match err {
        FormError::Validation(msg) => msg.clone(),
        FormError::Rejected(msg) => format!("Login failed: {msg}"),
        FormError::Unexpected(_) => "An error occurred during login".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{LocalAuth, DEMO_EMAIL, DEMO_PASSWORD};
    use futures::executor::block_on;

    #[test]
    fn demo_credentials_sign_in() {
        let auth = LocalAuth::with_demo_account();
        let form = LoginForm { email: DEMO_EMAIL.into(), password: DEMO_PASSWORD.into() };
        let user = block_on(submit_login(&auth, &form)).unwrap();
        assert_eq!(user.name, "John Doe");
    }

    #[test]
    fn bad_password_surfaces_provider_message() {
        let auth = LocalAuth::with_demo_account();
        let form = LoginForm { email: DEMO_EMAIL.into(), password: "nope".into() };
        let err = block_on(submit_login(&auth, &form)).unwrap_err();
        assert_eq!(failure_message(&err), "Login failed: Invalid login credentials");
    }

    #[test]
    fn malformed_email_never_reaches_provider() {
        let auth = LocalAuth::new();
        let form = LoginForm { email: "not-an-email".into(), password: "x".into() };
        let err = block_on(submit_login(&auth, &form)).unwrap_err();
        assert_eq!(failure_message(&err), "Enter a valid email address");
    }

    #[test]
    fn unexpected_errors_use_generic_copy() {
        let err = FormError::Unexpected("socket closed".into());
        assert_eq!(failure_message(&err), "An error occurred during login");
    }
}
