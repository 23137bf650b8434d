use secrecy::Secret;
use spendshare_core::{CredentialStore, Email, Password, Session, TokenService};

use crate::error::InternalError;

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Wrong email or password")]
    WrongCredentials,
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

/// Login use case - verifies credentials and rotates the refresh token
pub struct LoginUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    credential_store: &'a C,
    token_service: &'a T,
}

impl<'a, C, T> LoginUseCase<'a, C, T>
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

    /// Execute the login use case
    ///
    /// Every successful login replaces the stored refresh token, so any
    /// refresh token handed out earlier stops working.
    ///
    /// No format rules apply here: an address or password that could never
    /// have been registered is simply a credential mismatch.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<Session, LoginError> {
        let Ok(email) = Email::try_from(email) else {
            return Err(LoginError::WrongCredentials);
        };
        let password = Password::candidate(password);

        if !self
            .credential_store
            .check_credentials(&email, &password)
            .await
            .map_err(InternalError::from)?
        {
            tracing::warn!("Login rejected, wrong credentials");
            return Err(LoginError::WrongCredentials);
        }

        // The address can change between the two reads; treat that like a
        // mismatch rather than an internal failure.
        let user_id = self
            .credential_store
            .get_user_id_by_email(&email)
            .await
            .map_err(InternalError::from)?
            .ok_or(LoginError::WrongCredentials)?;

        let access_token = self
            .token_service
            .issue_access_token(&user_id)
            .map_err(InternalError::from)?;
        let refresh_token = self
            .token_service
            .issue_refresh_token(&user_id)
            .map_err(InternalError::from)?;

        self.credential_store
            .update_refresh_token(&user_id, &refresh_token)
            .await
            .perform()
            .await
            .map_err(InternalError::from)?;

        tracing::info!(user_id = %user_id, "User logged in");
        Ok(Session::new(user_id, access_token, refresh_token))
    }
}
