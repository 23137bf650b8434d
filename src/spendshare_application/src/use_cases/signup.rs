use secrecy::Secret;
use spendshare_core::{
    CredentialStore, CredentialStoreError, Email, FormatError, Password, Session, TokenService,
    UserId,
};

use crate::error::InternalError;

/// Error types for signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Wrong format: {0}")]
    WrongFormat(#[from] FormatError),
    #[error("Email is already taken")]
    AlreadyTaken,
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

/// Signup use case - registers a new user and opens their first session
pub struct SignupUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    credential_store: &'a C,
    token_service: &'a T,
}

impl<'a, C, T> SignupUseCase<'a, C, T>
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

    /// Execute the signup use case
    ///
    /// Nothing is written unless every check passes and both tokens were
    /// issued. The single write is terminal: if it fails there is nothing to
    /// roll back.
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<Session, SignupError> {
        let email = Email::try_from(email)?;
        let password = Password::try_from(password)?;

        if self
            .credential_store
            .get_user_id_by_email(&email)
            .await
            .map_err(InternalError::from)?
            .is_some()
        {
            tracing::warn!("Signup rejected, email already taken");
            return Err(SignupError::AlreadyTaken);
        }

        let user_id = UserId::new();
        let access_token = self
            .token_service
            .issue_access_token(&user_id)
            .map_err(InternalError::from)?;
        let refresh_token = self
            .token_service
            .issue_refresh_token(&user_id)
            .map_err(InternalError::from)?;

        self.credential_store
            .create_user(&user_id, &email, &password, &refresh_token)
            .await
            .perform()
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent signup for the same email.
                CredentialStoreError::UserAlreadyExists => SignupError::AlreadyTaken,
                e => InternalError::from(e).into(),
            })?;

        tracing::info!(user_id = %user_id, "User signed up");
        Ok(Session::new(user_id, access_token, refresh_token))
    }
}
