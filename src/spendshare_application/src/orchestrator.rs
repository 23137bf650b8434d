use secrecy::Secret;
use spendshare_core::{CredentialStore, Session, Token, TokenService, UserId};

use crate::use_cases::{
    AuthenticateError, AuthenticateUseCase, LoginError, LoginUseCase, LogoutError, LogoutUseCase,
    RefreshError, RefreshUseCase, SignupError, SignupUseCase, UpdateEmailError,
    UpdateEmailUseCase, UpdatePasswordError, UpdatePasswordUseCase,
};

/// Entry point for the session protocols.
///
/// Holds its collaborators and nothing else; every call runs one use case to
/// completion against them. Two concurrent logins or refreshes for the same
/// user both succeed and the later refresh-token write wins, leaving the
/// earlier caller with a revoked refresh token.
pub struct SessionOrchestrator<C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    credential_store: C,
    token_service: T,
}

impl<C, T> SessionOrchestrator<C, T>
where
    C: CredentialStore,
    T: TokenService,
{
    pub fn new(credential_store: C, token_service: T) -> Self {
        Self {
            credential_store,
            token_service,
        }
    }

    pub fn credential_store(&self) -> &C {
        &self.credential_store
    }

    pub fn token_service(&self) -> &T {
        &self.token_service
    }

    pub async fn signup(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<Session, SignupError> {
        SignupUseCase::new(&self.credential_store, &self.token_service)
            .execute(email, password)
            .await
    }

    pub async fn login(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<Session, LoginError> {
        LoginUseCase::new(&self.credential_store, &self.token_service)
            .execute(email, password)
            .await
    }

    pub async fn refresh(&self, refresh_token: Token) -> Result<Session, RefreshError> {
        RefreshUseCase::new(&self.credential_store, &self.token_service)
            .execute(refresh_token)
            .await
    }

    pub async fn logout(&self, user_id: &UserId) -> Result<(), LogoutError> {
        LogoutUseCase::new(&self.credential_store, &self.token_service)
            .execute(user_id)
            .await
    }

    pub async fn update_email(
        &self,
        new_email: Secret<String>,
        user_id: &UserId,
    ) -> Result<Session, UpdateEmailError> {
        UpdateEmailUseCase::new(&self.credential_store, &self.token_service)
            .execute(new_email, user_id)
            .await
    }

    pub async fn update_password(
        &self,
        old_password: Secret<String>,
        new_password: Secret<String>,
        user_id: &UserId,
    ) -> Result<Session, UpdatePasswordError> {
        UpdatePasswordUseCase::new(&self.credential_store, &self.token_service)
            .execute(old_password, new_password, user_id)
            .await
    }

    /// Resolve the user an access token was issued to.
    pub fn authenticate(&self, access_token: &Token) -> Result<UserId, AuthenticateError> {
        AuthenticateUseCase::new(&self.token_service).execute(access_token)
    }
}
