use argon2::{
    Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier, Version,
    password_hash::{self, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use spendshare_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id password hashing (m=15000 KiB, t=2, p=1).
///
/// Both operations run on the blocking pool, inside the caller's span.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, PasswordHasherError> {
    let params =
        Params::new(15000, 2, 1, None).map_err(|e| PasswordHasherError::Hash(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| PasswordHash::new(Secret::from(hash.to_string())))
                    .map_err(|e| PasswordHasherError::Hash(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Hash(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify_password(
        &self,
        password_hash: &PasswordHash,
        candidate: &Password,
    ) -> Result<bool, PasswordHasherError> {
        let expected = password_hash.as_ref().clone();
        let candidate = candidate.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = password_hash::PasswordHash::new(expected.expose_secret())
                    .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;

                match argon2()?
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::Hash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Hash(e.to_string()))?
    }
}
