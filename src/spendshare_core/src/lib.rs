pub mod clock;
pub mod domain;
pub mod ports;
pub mod transaction;

// Re-export commonly used types for convenience
pub use clock::{Clock, SystemClock};

pub use domain::{
    credential::CredentialRecord,
    email::Email,
    format::{FormatError, validate_email_format, validate_password_format},
    password::{Password, PasswordHash},
    session::Session,
    token::{Token, TokenKind},
    user_id::UserId,
};

pub use ports::{
    repositories::{CredentialRepository, CredentialStore, CredentialStoreError},
    services::{PasswordHasher, PasswordHasherError, TokenError, TokenService},
};

pub use transaction::{BoxedTransaction, Compensable, CompensatingTransaction, SnapshotTransaction};
