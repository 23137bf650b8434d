use spendshare_core::{
    CredentialStore, CredentialStoreError, Session, Token, TokenError, TokenKind, TokenService,
};

use crate::error::InternalError;

/// Error types for refresh use case
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Refresh token has expired")]
    TokenExpired,
    #[error("Refresh token is wrong")]
    TokenIsWrong,
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

impl From<TokenError> for RefreshError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => RefreshError::TokenExpired,
            TokenError::Invalid => RefreshError::TokenIsWrong,
            TokenError::Signing(_) => RefreshError::Internal(error.into()),
        }
    }
}

/// Refresh use case - trades a current refresh token for a new session
pub struct RefreshUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    credential_store: &'a C,
    token_service: &'a T,
}

impl<'a, C, T> RefreshUseCase<'a, C, T>
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

    /// Execute the refresh use case
    ///
    /// The presented token must be byte-for-byte the one currently stored for
    /// its subject. A token superseded by a later login, refresh or logout is
    /// rejected even while its signature and expiry are still good.
    #[tracing::instrument(name = "RefreshUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: Token) -> Result<Session, RefreshError> {
        self.token_service.validate_refresh_token(&refresh_token)?;
        let user_id = self
            .token_service
            .get_subject(&refresh_token, TokenKind::Refresh)?;

        let record = match self.credential_store.get_user_info(&user_id).await {
            Ok(record) => record,
            // Signed for a user that no longer exists (e.g. a compensated signup).
            Err(CredentialStoreError::UserNotFound) => return Err(RefreshError::TokenIsWrong),
            Err(e) => return Err(InternalError::from(e).into()),
        };

        if record.refresh_token != refresh_token {
            tracing::warn!(user_id = %user_id, "Refresh rejected, token was superseded");
            return Err(RefreshError::TokenIsWrong);
        }

        let access_token = self.token_service.issue_access_token(&user_id)?;
        let new_refresh_token = self.token_service.issue_refresh_token(&user_id)?;

        self.credential_store
            .update_refresh_token(&user_id, &new_refresh_token)
            .await
            .perform()
            .await
            .map_err(InternalError::from)?;

        tracing::info!(user_id = %user_id, "Session refreshed");
        Ok(Session::new(user_id, access_token, new_refresh_token))
    }
}
