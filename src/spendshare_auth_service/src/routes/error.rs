use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use spendshare_application::{
    AuthenticateError, InternalError, LoginError, LogoutError, RefreshError, SignupError,
    UpdateEmailError, UpdatePasswordError,
};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing token")]
    MissingToken,

    #[error("Email is already taken")]
    EmailAlreadyTaken,

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Unexpected error")]
    UnexpectedError(#[source] InternalError),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AuthApiError::InvalidInput(_) | AuthApiError::MissingToken => StatusCode::BAD_REQUEST,

            AuthApiError::EmailAlreadyTaken => StatusCode::CONFLICT,

            AuthApiError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,

            AuthApiError::UnexpectedError(cause) => {
                tracing::error!(error = %cause, "Request failed with an internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<SignupError> for AuthApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::WrongFormat(e) => AuthApiError::InvalidInput(e.to_string()),
            SignupError::AlreadyTaken => AuthApiError::EmailAlreadyTaken,
            SignupError::Internal(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::WrongCredentials => AuthApiError::AuthenticationError(error.to_string()),
            LoginError::Internal(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<RefreshError> for AuthApiError {
    fn from(error: RefreshError) -> Self {
        match error {
            RefreshError::TokenExpired | RefreshError::TokenIsWrong => {
                AuthApiError::AuthenticationError(error.to_string())
            }
            RefreshError::Internal(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<LogoutError> for AuthApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::Internal(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<UpdateEmailError> for AuthApiError {
    fn from(error: UpdateEmailError) -> Self {
        match error {
            UpdateEmailError::WrongFormat(e) => AuthApiError::InvalidInput(e.to_string()),
            UpdateEmailError::AlreadyTaken => AuthApiError::EmailAlreadyTaken,
            UpdateEmailError::Internal(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<UpdatePasswordError> for AuthApiError {
    fn from(error: UpdatePasswordError) -> Self {
        match error {
            UpdatePasswordError::WrongFormat(e) => AuthApiError::InvalidInput(e.to_string()),
            UpdatePasswordError::OldPasswordIsWrong => {
                AuthApiError::AuthenticationError(error.to_string())
            }
            UpdatePasswordError::Internal(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<AuthenticateError> for AuthApiError {
    fn from(error: AuthenticateError) -> Self {
        match error {
            AuthenticateError::TokenExpired | AuthenticateError::TokenIsWrong => {
                AuthApiError::AuthenticationError(error.to_string())
            }
            AuthenticateError::Internal(e) => AuthApiError::UnexpectedError(e),
        }
    }
}
