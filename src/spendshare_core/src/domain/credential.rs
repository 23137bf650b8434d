use crate::domain::{email::Email, password::PasswordHash, token::Token, user_id::UserId};

/// The persisted per-user row.
///
/// At most one record exists per email, and `refresh_token` holds the only
/// refresh token that is currently honoured for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub user_id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub refresh_token: Token,
    pub email_verified: bool,
}
