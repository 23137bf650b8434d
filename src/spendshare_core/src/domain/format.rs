//! Syntactic checks for user-supplied credentials.
//!
//! These are pure predicates: they never consult storage and never normalise
//! the input. A value that fails here is rejected before any read or write.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error(
        "Password must be between {} and {} characters",
        MIN_PASSWORD_LENGTH,
        MAX_PASSWORD_LENGTH
    )]
    InvalidPassword,
}

/// Accepts a single RFC-shaped `local@domain.tld` address with no surrounding
/// whitespace.
pub fn validate_email_format(email: &str) -> Result<(), FormatError> {
    if email.len() > MAX_EMAIL_LENGTH || !EMAIL_REGEX.is_match(email) {
        return Err(FormatError::InvalidEmail);
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_password_format(password: &str) -> Result<(), FormatError> {
    let length = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(FormatError::InvalidPassword);
    }
    Ok(())
}
