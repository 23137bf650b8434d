use chrono::Duration;
use config::{Config, ConfigError, Environment, File, Source};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use crate::authentication::TokenSettings;

use super::constants::{DEFAULT_SETTINGS_FILE, defaults, env};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("{0} secret must not be empty")]
    EmptySecret(&'static str),
    #[error("Access and refresh tokens must be signed with different secrets")]
    SharedSecret,
    #[error("{0} time to live must be positive")]
    NonPositiveTimeToLive(&'static str),
    #[error("Refresh token time to live must exceed the access token's")]
    RefreshOutlivedByAccess,
    #[error("Time to live of {0} seconds is out of range")]
    TimeToLiveOutOfRange(i64),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub access_token: TokenConfig,
    pub refresh_token: TokenConfig,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub secret: Secret<String>,
    /// Seconds.
    pub time_to_live: i64,
}

impl TokenConfig {
    pub fn to_token_settings(&self) -> Result<TokenSettings, SettingsError> {
        if !(1..=defaults::MAX_TOKEN_TTL_SECONDS).contains(&self.time_to_live) {
            return Err(SettingsError::TimeToLiveOutOfRange(self.time_to_live));
        }
        let time_to_live = Duration::try_seconds(self.time_to_live)
            .ok_or(SettingsError::TimeToLiveOutOfRange(self.time_to_live))?;

        Ok(TokenSettings::new(self.secret.clone(), time_to_live))
    }
}

/// Origins allowed to call the service cross-site. Empty means CORS is off.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Settings {
    /// Load from [`DEFAULT_SETTINGS_FILE`] and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(DEFAULT_SETTINGS_FILE)
    }

    /// Load from the given JSON file (if present), then apply `SPENDSHARE_*`
    /// environment overrides. A `.env` file is read first when there is one.
    pub fn load_from(path: &str) -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_source(File::with_name(path).required(false))
    }

    /// Build from defaults, `source`, and the environment, in that order of
    /// increasing precedence.
    pub fn from_source<S>(source: S) -> Result<Self, SettingsError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings: Settings = Config::builder()
            .set_default("application.address", defaults::APP_ADDRESS)?
            .set_default("postgres.max_connections", defaults::POSTGRES_MAX_CONNECTIONS)?
            .set_default(
                "auth.access_token.time_to_live",
                defaults::ACCESS_TOKEN_TTL_SECONDS,
            )?
            .set_default(
                "auth.refresh_token.time_to_live",
                defaults::REFRESH_TOKEN_TTL_SECONDS,
            )?
            .add_source(source)
            .add_source(
                Environment::with_prefix(env::PREFIX)
                    .prefix_separator(env::PREFIX_SEPARATOR)
                    .separator(env::SEPARATOR)
                    .try_parsing(true)
                    .list_separator(env::LIST_SEPARATOR)
                    .with_list_parse_key("auth.allowed_origins"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let access = &self.auth.access_token;
        let refresh = &self.auth.refresh_token;

        if access.secret.expose_secret().is_empty() {
            return Err(SettingsError::EmptySecret("Access token"));
        }
        if refresh.secret.expose_secret().is_empty() {
            return Err(SettingsError::EmptySecret("Refresh token"));
        }
        if access.secret.expose_secret() == refresh.secret.expose_secret() {
            return Err(SettingsError::SharedSecret);
        }
        if access.time_to_live <= 0 {
            return Err(SettingsError::NonPositiveTimeToLive("Access token"));
        }
        if refresh.time_to_live <= access.time_to_live {
            return Err(SettingsError::RefreshOutlivedByAccess);
        }
        if refresh.time_to_live > defaults::MAX_TOKEN_TTL_SECONDS {
            return Err(SettingsError::TimeToLiveOutOfRange(refresh.time_to_live));
        }
        Ok(())
    }
}
