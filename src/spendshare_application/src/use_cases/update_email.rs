use secrecy::Secret;
use spendshare_core::{
    CredentialStore, CredentialStoreError, Email, FormatError, Session, TokenService, UserId,
};

use crate::error::{InternalError, compensate};

/// Error types for update email use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateEmailError {
    #[error("Wrong format: {0}")]
    WrongFormat(#[from] FormatError),
    #[error("Email is already taken")]
    AlreadyTaken,
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

/// Update email use case - changes the login address and rotates the session
pub struct UpdateEmailUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    credential_store: &'a C,
    token_service: &'a T,
}

impl<'a, C, T> UpdateEmailUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    pub fn new(credential_store: &'a C, token_service: &'a T) -> Self {
        Self {
            credential_store,
            token_service,
        }
    }

    /// Execute the update email use case
    ///
    /// The email change and the refresh-token rotation are two separate
    /// writes. If the rotation fails, the email change is rolled back before
    /// the error is returned.
    #[tracing::instrument(name = "UpdateEmailUseCase::execute", skip_all, fields(user_id = %user_id))]
    pub async fn execute(
        &self,
        new_email: Secret<String>,
        user_id: &UserId,
    ) -> Result<Session, UpdateEmailError> {
        let new_email = Email::try_from(new_email)?;

        if self
            .credential_store
            .get_user_id_by_email(&new_email)
            .await
            .map_err(InternalError::from)?
            .is_some()
        {
            tracing::warn!("Email update rejected, email already taken");
            return Err(UpdateEmailError::AlreadyTaken);
        }

        let access_token = self
            .token_service
            .issue_access_token(user_id)
            .map_err(InternalError::from)?;
        let refresh_token = self
            .token_service
            .issue_refresh_token(user_id)
            .map_err(InternalError::from)?;

        let email_change = self
            .credential_store
            .update_email(user_id, &new_email)
            .await;
        let token_rotation = self
            .credential_store
            .update_refresh_token(user_id, &refresh_token)
            .await;

        email_change.perform().await.map_err(|e| match e {
            CredentialStoreError::UserAlreadyExists => UpdateEmailError::AlreadyTaken,
            e => InternalError::from(e).into(),
        })?;

        if let Err(e) = token_rotation.perform().await {
            return Err(compensate(&email_change, e).await.into());
        }

        tracing::info!("Email updated");
        Ok(Session::new(user_id.clone(), access_token, refresh_token))
    }
}
