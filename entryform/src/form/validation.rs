//! Draft validation
//!
//! Field rules live on `Draft` as `validator` attributes; this module holds the custom
//! rules and turns `validator::ValidationErrors` into ordered `FieldErrors`.
//! Every field is checked independently, there is no early exit.

use super::types::{City, Draft, FieldErrors, FormField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrorsKind};

/// `local@domain.tld`: no whitespace or '@' in any part, at least one '.' after the '@'
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub const INVALID_CITY_MESSAGE: &str = "Please select a valid city";

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub(crate) fn validate_email_field(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(error_with_message("required", "Email is required"));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(error_with_message("email", "Invalid email address"));
    }
    Ok(())
}

pub(crate) fn validate_city_field(city: &str) -> Result<(), ValidationError> {
    if city.is_empty() {
        return Err(error_with_message("required", "City is required"));
    }
    if city.parse::<City>().is_err() {
        return Err(error_with_message("enum", INVALID_CITY_MESSAGE));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate a draft, returning one message per offending field
pub fn validate(draft: &Draft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let Err(report) = draft.validate() else {
        return errors;
    };

    for (member, kind) in report.errors() {
        let member: &str = member.as_ref();
        let Some(field) = FormField::from_member(member) else {
            continue;
        };
        if let ValidationErrorsKind::Field(field_errors) = kind {
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            errors.insert(field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn valid_draft() -> Draft {
        Draft {
            full_name: "Ravi Shah".to_string(),
            email: "ravi@mail.co".to_string(),
            password: "s3cret".to_string(),
            address: "4 Station Road".to_string(),
            city: "Rajkot".to_string(),
            rating: 5,
            feedback: String::new(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = validate(&Draft::default());
        let collected: Vec<(FormField, &str)> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![
                (FormField::FullName, "Name is required"),
                (FormField::Email, "Email is required"),
                (FormField::Password, "Password is required"),
                (FormField::Address, "Address is required"),
                (FormField::City, "City is required"),
                (FormField::Rating, "Please rate your experience"),
            ]
        );
        assert!(!errors.contains(FormField::Feedback));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        for bad in ["a@b", "ab.com", "@b.com", "a b@c.de", "a@@b.co", "a@b."] {
            assert!(!is_valid_email(bad), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_email_messages() {
        let mut draft = valid_draft();
        draft.email = String::new();
        assert_eq!(validate(&draft).get(FormField::Email), Some("Email is required"));

        for bad in ["a@b", "ab.com", "@b.com"] {
            draft.email = bad.to_string();
            assert_eq!(
                validate(&draft).get(FormField::Email),
                Some("Invalid email address")
            );
        }
    }

    #[test]
    fn test_city_outside_enum_is_rejected() {
        let mut draft = valid_draft();
        draft.city = "Pune".to_string();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::City), Some(INVALID_CITY_MESSAGE));
    }

    #[test]
    fn test_rating_above_scale_is_rejected() {
        let mut draft = valid_draft();
        draft.rating = 6;
        assert!(validate(&draft).contains(FormField::Rating));
    }

    proptest! {
        #[test]
        fn prop_feedback_never_validated(feedback in ".*") {
            let mut draft = valid_draft();
            draft.feedback = feedback;
            prop_assert!(validate(&draft).is_empty());
        }

        #[test]
        fn prop_single_missing_field_yields_single_error(idx in 0usize..5) {
            let mut draft = valid_draft();
            let field = [
                FormField::FullName,
                FormField::Email,
                FormField::Password,
                FormField::Address,
                FormField::City,
            ][idx];
            draft.set(field, "").unwrap();
            let errors = validate(&draft);
            prop_assert_eq!(errors.len(), 1);
            prop_assert!(errors.contains(field));
        }
    }
}
