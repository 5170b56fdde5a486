//! src/domain/subscriber_email.rs

use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// Local part and domain must be free of whitespace and further `@`s, and the
// domain must contain a dot. `a@b` is rejected on purpose.
static EMAIL_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex."));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Returns an instance of `SubscriberEmail` if the input matches the
    /// required email format, an error otherwise.
    pub fn parse(s: String) -> Result<SubscriberEmail, ValidationError> {
        if EMAIL_FORMAT.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidEmail(s))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
