use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use spendshare_core::{Clock, SystemClock, Token, TokenError, TokenKind, TokenService, UserId};
use uuid::Uuid;

/// Signing secret and lifetime for one token kind.
#[derive(Clone)]
pub struct TokenSettings {
    pub secret: Secret<String>,
    pub time_to_live: Duration,
}

impl TokenSettings {
    pub fn new(secret: Secret<String>, time_to_live: Duration) -> Self {
        Self {
            secret,
            time_to_live,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
    /// Unique per token, so two tokens minted in the same second differ.
    pub jti: String,
}

/// HS256 JWTs, one secret per token kind.
///
/// `exp` is compared against the injected clock rather than the system
/// time, with no leeway: a token is expired from the second `now >= exp`.
#[derive(Clone)]
pub struct JwtTokenService {
    access: TokenSettings,
    refresh: TokenSettings,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    pub fn new(access: TokenSettings, refresh: TokenSettings, clock: impl Clock + 'static) -> Self {
        Self {
            access,
            refresh,
            clock: Arc::new(clock),
        }
    }

    pub fn with_system_clock(access: TokenSettings, refresh: TokenSettings) -> Self {
        Self::new(access, refresh, SystemClock)
    }

    fn settings(&self, kind: TokenKind) -> &TokenSettings {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    fn issue(&self, kind: TokenKind, subject: &UserId) -> Result<Token, TokenError> {
        let settings = self.settings(kind);
        let now = self.clock.now();
        let exp = now
            .checked_add_signed(settings.time_to_live)
            .ok_or_else(|| TokenError::Signing("Duration out of range".to_string()))?;

        let claims = Claims {
            sub: subject.as_str().to_owned(),
            kind,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(settings.as_bytes()),
        )
        .map(Token::from)
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn decode(&self, token: &Token, kind: TokenKind) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(
            token.as_str(),
            &DecodingKey::from_secret(self.settings(kind).as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, %kind, "Token rejected");
            TokenError::Invalid
        })?;

        if claims.kind != kind || claims.sub.is_empty() {
            return Err(TokenError::Invalid);
        }

        if self.clock.now().timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl TokenService for JwtTokenService {
    fn issue_access_token(&self, subject: &UserId) -> Result<Token, TokenError> {
        self.issue(TokenKind::Access, subject)
    }

    fn issue_refresh_token(&self, subject: &UserId) -> Result<Token, TokenError> {
        self.issue(TokenKind::Refresh, subject)
    }

    fn validate_access_token(&self, token: &Token) -> Result<(), TokenError> {
        self.decode(token, TokenKind::Access).map(|_| ())
    }

    fn validate_refresh_token(&self, token: &Token) -> Result<(), TokenError> {
        self.decode(token, TokenKind::Refresh).map(|_| ())
    }

    fn get_subject(&self, token: &Token, expected_kind: TokenKind) -> Result<UserId, TokenError> {
        self.decode(token, expected_kind)
            .map(|claims| UserId::from(claims.sub))
    }
}
