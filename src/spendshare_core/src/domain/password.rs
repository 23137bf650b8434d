use secrecy::{ExposeSecret, Secret};

use crate::domain::format::{FormatError, validate_password_format};

/// A plaintext password.
///
/// `Password::try_from` applies the format rules and is used for passwords
/// that are about to be stored. `Password::candidate` wraps a value only to be
/// compared against an existing hash, so a login attempt with a short password
/// is a credential mismatch rather than a format error.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn candidate(password: Secret<String>) -> Self {
        Self(password)
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = FormatError;

    fn try_from(password: Secret<String>) -> Result<Self, Self::Error> {
        validate_password_format(password.expose_secret())?;
        Ok(Self(password))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// A salted one-way hash in PHC string format.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for PasswordHash {}
