use color_eyre::eyre::Result;
use secrecy::ExposeSecret;
use spendshare_adapters::{
    Argon2PasswordHasher, JwtTokenService, PostgresCredentialRepository, Settings,
};
use spendshare_application::{RepositoryCredentialStore, SessionOrchestrator};
use spendshare_auth_service::{AuthService, init_tracing};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;

    // Setup database connection pool
    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.postgres.max_connections)
        .connect(settings.postgres.url.expose_secret())
        .await?;

    // Run migrations
    sqlx::migrate!().run(&pg_pool).await?;

    let credential_store = RepositoryCredentialStore::new(
        PostgresCredentialRepository::new(pg_pool),
        Argon2PasswordHasher::new(),
    );
    let token_service = JwtTokenService::with_system_clock(
        settings.auth.access_token.to_token_settings()?,
        settings.auth.refresh_token.to_token_settings()?,
    );

    let auth_service = AuthService::new(SessionOrchestrator::new(credential_store, token_service));

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting spendshare auth service...");

    auth_service
        .run_standalone(listener, Some(settings.auth.allowed_origins.clone()))
        .await?;

    Ok(())
}
