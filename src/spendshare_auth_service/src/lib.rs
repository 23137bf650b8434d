pub mod auth_service;
pub mod routes;
pub mod telemetry;

pub use auth_service::AuthService;
pub use routes::error::{AuthApiError, ErrorResponse};
pub use telemetry::init_tracing;
