use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

use crate::domain::format::{FormatError, validate_email_format};

/// A syntactically valid email address.
///
/// The address is held as a secret so it never shows up in `Debug` output or
/// tracing spans.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(email: Secret<String>) -> Result<Self, FormatError> {
        validate_email_format(email.expose_secret())?;
        Ok(Self(email))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = FormatError;

    fn try_from(email: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(email)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
