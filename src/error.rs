//! Form submission errors.
//!
//! Pages turn each [`FormError`] variant into its own user-facing copy.

use std::fmt;
use validator::ValidationErrors;

use crate::auth::AuthError;

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Caught before submission; the message is shown inline.
    Validation(String),
    /// The collaborator refused the request and explained why.
    Rejected(String),
    /// Transport, decoding or other internal failure.
    Unexpected(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            FormError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            FormError::Unexpected(msg) => write!(f, "Unexpected Error: {}", msg),
        }
    }
}

impl std::error::Error for FormError {}

/// Keeps the per-field messages, ordered by field name so the text is stable.
impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> FormError {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(name, _)| *name);
        let msgs: Vec<String> = fields
            .into_iter()
            .flat_map(|(name, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(m) => m.to_string(),
                    None => format!("{name} is invalid"),
                })
            })
            .collect();
        FormError::Validation(msgs.join("; "))
    }
}

impl From<AuthError> for FormError {
    fn from(error: AuthError) -> FormError {
        match error {
            AuthError::Rejected(msg) => FormError::Rejected(msg),
            other => FormError::Unexpected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(email(message = "Enter a valid email"))]
        email: String,
    }

    #[test]
    fn validation_messages_are_joined_in_field_order() {
        let err: FormError = Probe { name: String::new(), email: "nope".into() }
            .validate()
            .unwrap_err()
            .into();
        assert_eq!(err, FormError::Validation("Enter a valid email; Name is required".into()));
    }

    #[test]
    fn auth_rejections_keep_their_message() {
        let err: FormError = AuthError::Rejected("Invalid login credentials".into()).into();
        assert_eq!(err, FormError::Rejected("Invalid login credentials".into()));

        let err: FormError = AuthError::Transport("connection refused".into()).into();
        assert!(matches!(err, FormError::Unexpected(_)));
    }
}
