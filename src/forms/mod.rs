//! Controlled-form state and submission.
//!
//! Each form is a plain struct updated field by field from the UI, validated
//! locally with `validator`, and submitted through an `async fn` (auth-backed
//! forms) or a plain fn (bid, job). Pages track progress with [`FormStatus`].

pub mod bid;
pub mod chat;
pub mod job;
pub mod login;
pub mod register;

use validator::ValidationError;

/// Idle -> Editing -> Submitting -> Success | Failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Editing,
    Submitting,
    Success,
    Failure(String),
}

impl FormStatus {
    /// A field changed. An in-flight submit is left alone.
    pub fn edit(&mut self) {
        if *self != FormStatus::Submitting {
            *self = FormStatus::Editing;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormStatus::Failure(msg) => Some(msg),
            _ => None,
        }
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_does_not_interrupt_a_submit() {
        let mut s = FormStatus::Submitting;
        s.edit();
        assert!(s.is_submitting());

        let mut s = FormStatus::Failure("nope".into());
        assert_eq!(s.error(), Some("nope"));
        s.edit();
        assert_eq!(s, FormStatus::Editing);
    }

    #[test]
    fn whitespace_is_blank() {
        assert!(not_blank("  \n").is_err());
        assert!(not_blank(" x ").is_ok());
    }
}
