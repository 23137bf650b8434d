use spendshare_core::{CredentialStore, TokenService, UserId};

use crate::error::InternalError;

#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

/// Logout use case - revokes the current refresh token without replacing it
pub struct LogoutUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    credential_store: &'a C,
    token_service: &'a T,
}

impl<'a, C, T> LogoutUseCase<'a, C, T>
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

    /// Overwrite the stored refresh token with one that is never handed out.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all, fields(user_id = %user_id))]
    pub async fn execute(&self, user_id: &UserId) -> Result<(), LogoutError> {
        let unused_token = self
            .token_service
            .issue_refresh_token(user_id)
            .map_err(InternalError::from)?;

        self.credential_store
            .update_refresh_token(user_id, &unused_token)
            .await
            .perform()
            .await
            .map_err(InternalError::from)?;

        tracing::info!("User logged out");
        Ok(())
    }
}
