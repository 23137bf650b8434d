use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use spendshare_application::SessionOrchestrator;
use spendshare_core::{CredentialStore, Token, TokenService};

use super::{SessionResponse, error::AuthApiError};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[tracing::instrument(name = "Refresh", skip_all)]
pub async fn refresh<C, T>(
    State(orchestrator): State<Arc<SessionOrchestrator<C, T>>>,
    Json(request): Json<RefreshRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    C: CredentialStore + 'static,
    T: TokenService + 'static,
{
    let session = orchestrator
        .refresh(Token::new(request.refresh_token))
        .await?;

    Ok((StatusCode::OK, Json(SessionResponse::from(session))))
}
