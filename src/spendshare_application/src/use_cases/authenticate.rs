use spendshare_core::{Token, TokenError, TokenKind, TokenService, UserId};

use crate::error::InternalError;

#[derive(Debug, thiserror::Error)]
pub enum AuthenticateError {
    #[error("Access token has expired")]
    TokenExpired,
    #[error("Access token is wrong")]
    TokenIsWrong,
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

impl From<TokenError> for AuthenticateError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => AuthenticateError::TokenExpired,
            TokenError::Invalid => AuthenticateError::TokenIsWrong,
            TokenError::Signing(_) => AuthenticateError::Internal(error.into()),
        }
    }
}

/// Authenticate use case - resolves the caller behind an access token
///
/// Access tokens are stateless, so no storage is consulted.
pub struct AuthenticateUseCase<'a, T>
where
    T: TokenService,
{
    token_service: &'a T,
}

impl<'a, T> AuthenticateUseCase<'a, T>
where
    T: TokenService,
{
    pub fn new(token_service: &'a T) -> Self {
        Self { token_service }
    }

    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip_all)]
    pub fn execute(&self, access_token: &Token) -> Result<UserId, AuthenticateError> {
        self.token_service.validate_access_token(access_token)?;
        Ok(self
            .token_service
            .get_subject(access_token, TokenKind::Access)?)
    }
}
