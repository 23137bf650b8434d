use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use spendshare_application::SessionOrchestrator;
use spendshare_core::{CredentialStore, TokenService};

use super::{SessionResponse, error::AuthApiError};

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<C, T>(
    State(orchestrator): State<Arc<SessionOrchestrator<C, T>>>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    C: CredentialStore + 'static,
    T: TokenService + 'static,
{
    let session = orchestrator
        .signup(request.email, request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(SessionResponse::from(session))))
}
