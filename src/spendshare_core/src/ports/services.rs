use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::{Password, PasswordHash},
    token::{Token, TokenKind},
    user_id::UserId,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature and claims are valid but the expiry has passed.
    #[error("Token has expired")]
    Expired,
    /// Bad signature, wrong kind, malformed or missing claims.
    #[error("Token is invalid")]
    Invalid,
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Issues and validates signed, time-bound tokens.
///
/// Implementations are pure apart from reading their injected clock and are
/// safe to call concurrently.
pub trait TokenService: Send + Sync {
    fn issue_access_token(&self, subject: &UserId) -> Result<Token, TokenError>;
    fn issue_refresh_token(&self, subject: &UserId) -> Result<Token, TokenError>;
    fn validate_access_token(&self, token: &Token) -> Result<(), TokenError>;
    fn validate_refresh_token(&self, token: &Token) -> Result<(), TokenError>;
    fn get_subject(&self, token: &Token, expected_kind: TokenKind) -> Result<UserId, TokenError>;
}

#[derive(Debug, Clone, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Salted one-way password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;
    /// `Ok(false)` on a mismatch; `Err` only when the comparison itself could
    /// not be carried out.
    async fn verify_password(
        &self,
        password_hash: &PasswordHash,
        candidate: &Password,
    ) -> Result<bool, PasswordHasherError>;
}
