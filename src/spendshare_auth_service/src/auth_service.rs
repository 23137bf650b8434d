use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::post,
};
use spendshare_adapters::config::AllowedOrigins;
use spendshare_application::SessionOrchestrator;
use spendshare_core::{CredentialStore, TokenService};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::{
    login, logout, refresh, signup, update_email, update_password, verify_token,
};
use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// HTTP front for the session protocols.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create the router around an orchestrator.
    ///
    /// Every route shares the same orchestrator behind an `Arc`; it holds no
    /// mutable state of its own.
    pub fn new<C, T>(orchestrator: SessionOrchestrator<C, T>) -> Self
    where
        C: CredentialStore + 'static,
        T: TokenService + 'static,
    {
        let router = Router::new()
            .route("/signup", post(signup::<C, T>))
            .route("/login", post(login::<C, T>))
            .route("/refresh", post(refresh::<C, T>))
            .route("/logout", post(logout::<C, T>))
            .route("/update-email", post(update_email::<C, T>))
            .route("/update-password", post(update_password::<C, T>))
            .route("/verify-token", post(verify_token::<C, T>))
            .with_state(Arc::new(orchestrator));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be nested into another
    /// application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
