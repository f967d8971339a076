//! Field checks for resident-submitted forms.

use crate::model::ContactForm;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\-+]{9,15}$").expect("phone pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts 9 to 15 digits, dashes or plus signs once whitespace is removed.
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

impl ContactForm {
    /// Returns every problem with the form, in field order. Empty means valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !validate_required(&self.name) {
            errors.push(FieldError::new("name", "Please enter your name"));
        }

        let email = self.email.trim();
        if !validate_required(email) || !validate_email(email) {
            errors.push(FieldError::new("email", "Please enter a valid email address"));
        }

        if validate_required(&self.phone) && !validate_phone(&self.phone) {
            errors.push(FieldError::new("phone", "Please enter a valid phone number"));
        }

        if !validate_required(&self.subject) {
            errors.push(FieldError::new("subject", "Please select a subject"));
        }

        if !validate_required(&self.message) {
            errors.push(FieldError::new("message", "Please enter your message"));
        }

        errors
    }
}
