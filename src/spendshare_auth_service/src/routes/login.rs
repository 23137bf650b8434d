use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use spendshare_application::SessionOrchestrator;
use spendshare_core::{CredentialStore, TokenService};

use super::{SessionResponse, error::AuthApiError};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<C, T>(
    State(orchestrator): State<Arc<SessionOrchestrator<C, T>>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    C: CredentialStore + 'static,
    T: TokenService + 'static,
{
    let session = orchestrator.login(request.email, request.password).await?;

    Ok((StatusCode::OK, Json(SessionResponse::from(session))))
}
