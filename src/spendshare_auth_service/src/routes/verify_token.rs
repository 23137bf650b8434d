use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use spendshare_application::SessionOrchestrator;
use spendshare_core::{CredentialStore, Token, TokenService};

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenResponse {
    pub user_id: String,
}

/// Lets other services check an access token without sharing its secret.
#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token<C, T>(
    State(orchestrator): State<Arc<SessionOrchestrator<C, T>>>,
    Json(request): Json<VerifyTokenRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    C: CredentialStore + 'static,
    T: TokenService + 'static,
{
    let user_id = orchestrator.authenticate(&Token::new(request.token))?;

    Ok((
        StatusCode::OK,
        Json(VerifyTokenResponse {
            user_id: user_id.into_string(),
        }),
    ))
}
