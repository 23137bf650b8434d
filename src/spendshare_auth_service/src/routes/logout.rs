use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use spendshare_application::SessionOrchestrator;
use spendshare_core::{CredentialStore, TokenService};

use super::{BearerToken, error::AuthApiError};

/// Revokes the caller's refresh token. The access token stays valid until it
/// expires.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<C, T>(
    State(orchestrator): State<Arc<SessionOrchestrator<C, T>>>,
    BearerToken(access_token): BearerToken,
) -> Result<impl IntoResponse, AuthApiError>
where
    C: CredentialStore + 'static,
    T: TokenService + 'static,
{
    let user_id = orchestrator.authenticate(&access_token)?;
    orchestrator.logout(&user_id).await?;

    Ok(StatusCode::OK)
}
