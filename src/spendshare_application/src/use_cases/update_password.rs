use secrecy::Secret;
use spendshare_core::{
    CredentialStore, FormatError, Password, Session, TokenService, UserId,
};

use crate::error::{InternalError, compensate};

/// Error types for update password use case
#[derive(Debug, thiserror::Error)]
pub enum UpdatePasswordError {
    #[error("Wrong format: {0}")]
    WrongFormat(#[from] FormatError),
    #[error("Old password is wrong")]
    OldPasswordIsWrong,
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

/// Update password use case - replaces the password hash and rotates the session
pub struct UpdatePasswordUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    credential_store: &'a C,
    token_service: &'a T,
}

impl<'a, C, T> UpdatePasswordUseCase<'a, C, T>
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

    /// Execute the update password use case
    ///
    /// Only the new password is format checked. The old one just has to
    /// match what is stored.
    #[tracing::instrument(name = "UpdatePasswordUseCase::execute", skip_all, fields(user_id = %user_id))]
    pub async fn execute(
        &self,
        old_password: Secret<String>,
        new_password: Secret<String>,
        user_id: &UserId,
    ) -> Result<Session, UpdatePasswordError> {
        let new_password = Password::try_from(new_password)?;
        let old_password = Password::candidate(old_password);

        let record = self
            .credential_store
            .get_user_info(user_id)
            .await
            .map_err(InternalError::from)?;

        if !self
            .credential_store
            .check_credentials(&record.email, &old_password)
            .await
            .map_err(InternalError::from)?
        {
            tracing::warn!("Password update rejected, old password is wrong");
            return Err(UpdatePasswordError::OldPasswordIsWrong);
        }

        let access_token = self
            .token_service
            .issue_access_token(user_id)
            .map_err(InternalError::from)?;
        let refresh_token = self
            .token_service
            .issue_refresh_token(user_id)
            .map_err(InternalError::from)?;

        let password_change = self
            .credential_store
            .update_password(user_id, &new_password)
            .await;
        let token_rotation = self
            .credential_store
            .update_refresh_token(user_id, &refresh_token)
            .await;

        password_change
            .perform()
            .await
            .map_err(InternalError::from)?;

        if let Err(e) = token_rotation.perform().await {
            return Err(compensate(&password_change, e).await.into());
        }

        tracing::info!("Password updated");
        Ok(Session::new(user_id.clone(), access_token, refresh_token))
    }
}
