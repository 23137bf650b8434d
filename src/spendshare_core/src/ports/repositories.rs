use async_trait::async_trait;
use thiserror::Error;

use crate::{
    domain::{
        credential::CredentialRecord,
        email::Email,
        password::{Password, PasswordHash},
        token::Token,
        user_id::UserId,
    },
    transaction::BoxedTransaction,
};

// CredentialStore port traits and errors
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Row-level persistence for credential records.
///
/// Every method is a single statement against the backing store and is
/// assumed atomic on its own; nothing here spans more than one write.
/// `insert` and `set_email` must reject an email already bound to another
/// user with `UserAlreadyExists`, and the setters report a missing row as
/// `UserNotFound`.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn find_by_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError>;
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError>;
    async fn insert(&self, record: CredentialRecord) -> Result<(), CredentialStoreError>;
    async fn delete(&self, user_id: &UserId) -> Result<(), CredentialStoreError>;
    async fn set_email(&self, user_id: &UserId, email: &Email) -> Result<(), CredentialStoreError>;
    async fn set_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &PasswordHash,
    ) -> Result<(), CredentialStoreError>;
    async fn set_refresh_token(
        &self,
        user_id: &UserId,
        refresh_token: &Token,
    ) -> Result<(), CredentialStoreError>;
}

/// The credential store consumed by the session protocols.
///
/// Reads are pure. Writes do not touch storage when called: they read the
/// current state, then hand back a transaction whose `perform` applies the
/// change and whose `rollback` restores what was read.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get_user_id_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserId>, CredentialStoreError>;
    async fn check_credentials(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<bool, CredentialStoreError>;
    async fn get_user_info(&self, user_id: &UserId)
    -> Result<CredentialRecord, CredentialStoreError>;
    async fn is_user_exists(&self, user_id: &UserId) -> Result<bool, CredentialStoreError>;

    async fn create_user(
        &self,
        user_id: &UserId,
        email: &Email,
        password: &Password,
        refresh_token: &Token,
    ) -> BoxedTransaction;
    async fn update_refresh_token(&self, user_id: &UserId, refresh_token: &Token)
    -> BoxedTransaction;
    async fn update_password(&self, user_id: &UserId, new_password: &Password)
    -> BoxedTransaction;
    async fn update_email(&self, user_id: &UserId, new_email: &Email) -> BoxedTransaction;
}
