//! One rule set for both sides of the wire.
//!
//! The form runs these rules before it sends anything and the endpoint runs
//! them again on whatever arrives, so the two layers can never disagree on
//! what a valid submission looks like.

use regex::Regex;

use crate::payloads::FeedbackSubmission;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_INVALID: &str = "Valid email is required.";
pub const PHONE_INVALID: &str = "Invalid phone number format (e.g., +15551234567).";
pub const PHONE_TYPE_INVALID: &str = "Invalid phone number format.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// Checks every rule and reports failures in field order, so the endpoint can
/// answer with the first one and the form can attach each to its field.
pub fn validate(data: &FeedbackSubmission) -> Vec<ValidationError> {
    let mut failures = Vec::new();

    if data.name.trim().is_empty() {
        failures.push(ValidationError {
            field: Field::Name,
            message: NAME_REQUIRED,
        });
    }

    if !is_valid_email(&data.email) {
        failures.push(ValidationError {
            field: Field::Email,
            message: EMAIL_INVALID,
        });
    }

    if let Some(phone) = data.normalized_phone() {
        if !is_valid_phone(phone) {
            failures.push(ValidationError {
                field: Field::Phone,
                message: PHONE_INVALID,
            });
        }
    }

    failures
}

/// Loose "text@text.text" shape, not full RFC validation.
pub fn is_valid_email(email: &str) -> bool {
    let shape = Regex::new(r"\S+@\S+\.\S+").unwrap();

    shape.is_match(email)
}

/// Optional leading '+', then 8-15 digits, first digit nonzero.
pub fn is_valid_phone(phone: &str) -> bool {
    let shape = Regex::new(r"^\+?[1-9]\d{7,14}$").unwrap();

    shape.is_match(phone)
}
