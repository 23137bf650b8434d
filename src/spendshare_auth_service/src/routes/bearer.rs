use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use spendshare_core::Token;

use super::error::AuthApiError;

/// Token taken from an `Authorization: Bearer <token>` header.
#[derive(Debug)]
pub struct BearerToken(pub Token);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AuthApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthApiError::MissingToken)?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthApiError::MissingToken)?;

        Ok(BearerToken(Token::new(token)))
    }
}
