pub mod authentication;
pub mod config;
pub mod hashing;
pub mod persistence;

pub use authentication::{JwtTokenService, TokenSettings};
pub use config::{Settings, SettingsError};
pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapCredentialRepository, PostgresCredentialRepository};
