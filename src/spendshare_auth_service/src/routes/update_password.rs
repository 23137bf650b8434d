use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use spendshare_application::SessionOrchestrator;
use spendshare_core::{CredentialStore, TokenService};

use super::{BearerToken, SessionResponse, error::AuthApiError};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub old_password: Secret<String>,
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Update password", skip_all)]
pub async fn update_password<C, T>(
    State(orchestrator): State<Arc<SessionOrchestrator<C, T>>>,
    BearerToken(access_token): BearerToken,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    C: CredentialStore + 'static,
    T: TokenService + 'static,
{
    let user_id = orchestrator.authenticate(&access_token)?;
    let session = orchestrator
        .update_password(request.old_password, request.new_password, &user_id)
        .await?;

    Ok((StatusCode::OK, Json(SessionResponse::from(session))))
}
