#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use chrono::{DateTime, Duration, Utc};
use spendshare::{
    Argon2PasswordHasher, CredentialRecord, CredentialRepository, CredentialStoreError, Email,
    HashMapCredentialRepository, JwtTokenService, PasswordHash, RepositoryCredentialStore, Secret,
    SessionOrchestrator, Token, TokenSettings, UserId, async_trait,
};

pub type Orchestrator = SessionOrchestrator<
    RepositoryCredentialStore<FaultyRepository, Argon2PasswordHasher>,
    JwtTokenService,
>;

pub const ACCESS_TTL_SECONDS: i64 = 600;
pub const REFRESH_TTL_SECONDS: i64 = 86_400;

/// In-memory repository whose refresh-token and email writes can be made to
/// fail on demand.
#[derive(Clone)]
pub struct FaultyRepository {
    inner: HashMapCredentialRepository,
    fail_refresh_token_writes: Arc<AtomicBool>,
    email_writes_left: Arc<AtomicUsize>,
}

impl Default for FaultyRepository {
    fn default() -> Self {
        Self {
            inner: HashMapCredentialRepository::new(),
            fail_refresh_token_writes: Arc::new(AtomicBool::new(false)),
            email_writes_left: Arc::new(AtomicUsize::new(usize::MAX)),
        }
    }
}

impl FaultyRepository {
    pub fn fail_refresh_token_writes(&self) {
        self.fail_refresh_token_writes.store(true, Ordering::SeqCst);
    }

    pub fn allow_email_writes(&self, count: usize) {
        self.email_writes_left.store(count, Ordering::SeqCst);
    }

    fn injected(operation: &str) -> CredentialStoreError {
        CredentialStoreError::UnexpectedError(format!("injected {operation} failure"))
    }
}

#[async_trait]
impl CredentialRepository for FaultyRepository {
    async fn find_by_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        self.inner.find_by_id(user_id).await
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        self.inner.find_by_email(email).await
    }

    async fn insert(&self, record: CredentialRecord) -> Result<(), CredentialStoreError> {
        self.inner.insert(record).await
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), CredentialStoreError> {
        self.inner.delete(user_id).await
    }

    async fn set_email(&self, user_id: &UserId, email: &Email) -> Result<(), CredentialStoreError> {
        self.email_writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .map_err(|_| Self::injected("email write"))?;
        self.inner.set_email(user_id, email).await
    }

    async fn set_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &PasswordHash,
    ) -> Result<(), CredentialStoreError> {
        self.inner.set_password_hash(user_id, password_hash).await
    }

    async fn set_refresh_token(
        &self,
        user_id: &UserId,
        refresh_token: &Token,
    ) -> Result<(), CredentialStoreError> {
        if self.fail_refresh_token_writes.load(Ordering::SeqCst) {
            return Err(Self::injected("refresh token write"));
        }
        self.inner.set_refresh_token(user_id, refresh_token).await
    }
}

/// Clock the test moves by hand.
#[derive(Clone)]
pub struct TestClock(Arc<Mutex<DateTime<Utc>>>);

impl TestClock {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Utc::now())))
    }

    pub fn advance(&self, seconds: i64) {
        *self.0.lock().unwrap() += Duration::seconds(seconds);
    }

    pub fn as_fn(&self) -> impl Fn() -> DateTime<Utc> + Send + Sync + 'static {
        let now = self.0.clone();
        move || *now.lock().unwrap()
    }
}

pub fn token_service(clock: &TestClock) -> JwtTokenService {
    JwtTokenService::new(
        TokenSettings::new(
            Secret::from("integration-access-secret".to_string()),
            Duration::seconds(ACCESS_TTL_SECONDS),
        ),
        TokenSettings::new(
            Secret::from("integration-refresh-secret".to_string()),
            Duration::seconds(REFRESH_TTL_SECONDS),
        ),
        clock.as_fn(),
    )
}

pub fn orchestrator(repository: &FaultyRepository, clock: &TestClock) -> Orchestrator {
    SessionOrchestrator::new(
        RepositoryCredentialStore::new(repository.clone(), Argon2PasswordHasher::new()),
        token_service(clock),
    )
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::from(value.to_string())
}

pub fn email(value: &str) -> Email {
    Email::try_from(secret(value)).unwrap()
}
