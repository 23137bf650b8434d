use async_trait::async_trait;
use spendshare_core::{
    BoxedTransaction, Compensable, CredentialRecord, CredentialRepository, CredentialStore,
    CredentialStoreError, Email, Password, PasswordHash, PasswordHasher, SnapshotTransaction,
    Token, UserId,
};

/// [`CredentialStore`] built on a row-level repository and a password hasher.
///
/// Every write factory awaits a read of the current row before it returns, so
/// the snapshot used for rollback always predates the write it guards.
#[derive(Clone)]
pub struct RepositoryCredentialStore<R, H> {
    repository: R,
    hasher: H,
}

impl<R, H> RepositoryCredentialStore<R, H>
where
    R: CredentialRepository + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    pub fn new(repository: R, hasher: H) -> Self {
        Self { repository, hasher }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    async fn snapshot<T>(
        &self,
        user_id: &UserId,
        field: impl FnOnce(CredentialRecord) -> T + Send,
    ) -> Result<T, CredentialStoreError> {
        self.repository
            .find_by_id(user_id)
            .await?
            .map(field)
            .ok_or(CredentialStoreError::UserNotFound)
    }
}

#[async_trait]
impl<R, H> CredentialStore for RepositoryCredentialStore<R, H>
where
    R: CredentialRepository + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    #[tracing::instrument(name = "CredentialStore::get_user_id_by_email", skip_all)]
    async fn get_user_id_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserId>, CredentialStoreError> {
        Ok(self
            .repository
            .find_by_email(email)
            .await?
            .map(|record| record.user_id))
    }

    #[tracing::instrument(name = "CredentialStore::check_credentials", skip_all)]
    async fn check_credentials(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<bool, CredentialStoreError> {
        let Some(record) = self.repository.find_by_email(email).await? else {
            return Ok(false);
        };

        self.hasher
            .verify_password(&record.password_hash, password)
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "CredentialStore::get_user_info", skip_all, fields(user_id = %user_id))]
    async fn get_user_info(
        &self,
        user_id: &UserId,
    ) -> Result<CredentialRecord, CredentialStoreError> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(CredentialStoreError::UserNotFound)
    }

    #[tracing::instrument(name = "CredentialStore::is_user_exists", skip_all, fields(user_id = %user_id))]
    async fn is_user_exists(&self, user_id: &UserId) -> Result<bool, CredentialStoreError> {
        Ok(self.repository.find_by_id(user_id).await?.is_some())
    }

    #[tracing::instrument(name = "CredentialStore::create_user", skip_all, fields(user_id = %user_id))]
    async fn create_user(
        &self,
        user_id: &UserId,
        email: &Email,
        password: &Password,
        refresh_token: &Token,
    ) -> BoxedTransaction {
        let existed = self
            .repository
            .find_by_id(user_id)
            .await
            .map(|record| record.is_some());

        SnapshotTransaction::new(
            InsertCredential {
                repository: self.repository.clone(),
                hasher: self.hasher.clone(),
                user_id: user_id.clone(),
                email: email.clone(),
                password: password.clone(),
                refresh_token: refresh_token.clone(),
            },
            existed,
        )
        .boxed()
    }

    #[tracing::instrument(name = "CredentialStore::update_refresh_token", skip_all, fields(user_id = %user_id))]
    async fn update_refresh_token(
        &self,
        user_id: &UserId,
        refresh_token: &Token,
    ) -> BoxedTransaction {
        let prior = self
            .snapshot(user_id, |record| record.refresh_token)
            .await;

        SnapshotTransaction::new(
            ReplaceRefreshToken {
                repository: self.repository.clone(),
                user_id: user_id.clone(),
                refresh_token: refresh_token.clone(),
            },
            prior,
        )
        .boxed()
    }

    #[tracing::instrument(name = "CredentialStore::update_password", skip_all, fields(user_id = %user_id))]
    async fn update_password(
        &self,
        user_id: &UserId,
        new_password: &Password,
    ) -> BoxedTransaction {
        let prior = self
            .snapshot(user_id, |record| record.password_hash)
            .await;

        SnapshotTransaction::new(
            ReplacePasswordHash {
                repository: self.repository.clone(),
                hasher: self.hasher.clone(),
                user_id: user_id.clone(),
                new_password: new_password.clone(),
            },
            prior,
        )
        .boxed()
    }

    #[tracing::instrument(name = "CredentialStore::update_email", skip_all, fields(user_id = %user_id))]
    async fn update_email(&self, user_id: &UserId, new_email: &Email) -> BoxedTransaction {
        let prior = self.snapshot(user_id, |record| record.email).await;

        SnapshotTransaction::new(
            ReplaceEmail {
                repository: self.repository.clone(),
                user_id: user_id.clone(),
                new_email: new_email.clone(),
            },
            prior,
        )
        .boxed()
    }
}

// ============================================================================
// Compensable writes
// ============================================================================

struct InsertCredential<R, H> {
    repository: R,
    hasher: H,
    user_id: UserId,
    email: Email,
    password: Password,
    refresh_token: Token,
}

#[async_trait]
impl<R, H> Compensable for InsertCredential<R, H>
where
    R: CredentialRepository,
    H: PasswordHasher,
{
    /// Whether a row with this id already existed.
    type Prior = bool;

    async fn apply(&self) -> Result<(), CredentialStoreError> {
        let password_hash = self
            .hasher
            .hash_password(&self.password)
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        self.repository
            .insert(CredentialRecord {
                user_id: self.user_id.clone(),
                email: self.email.clone(),
                password_hash,
                refresh_token: self.refresh_token.clone(),
                email_verified: false,
            })
            .await
    }

    async fn restore(&self, existed: &bool) -> Result<(), CredentialStoreError> {
        if *existed {
            // Rollback follows a successful perform, which cannot happen over
            // an existing row; never delete a row this insert did not create.
            return Ok(());
        }
        self.repository.delete(&self.user_id).await
    }
}

struct ReplaceRefreshToken<R> {
    repository: R,
    user_id: UserId,
    refresh_token: Token,
}

#[async_trait]
impl<R: CredentialRepository> Compensable for ReplaceRefreshToken<R> {
    type Prior = Token;

    async fn apply(&self) -> Result<(), CredentialStoreError> {
        self.repository
            .set_refresh_token(&self.user_id, &self.refresh_token)
            .await
    }

    async fn restore(&self, prior: &Token) -> Result<(), CredentialStoreError> {
        self.repository.set_refresh_token(&self.user_id, prior).await
    }
}

struct ReplacePasswordHash<R, H> {
    repository: R,
    hasher: H,
    user_id: UserId,
    new_password: Password,
}

#[async_trait]
impl<R, H> Compensable for ReplacePasswordHash<R, H>
where
    R: CredentialRepository,
    H: PasswordHasher,
{
    type Prior = PasswordHash;

    async fn apply(&self) -> Result<(), CredentialStoreError> {
        let password_hash = self
            .hasher
            .hash_password(&self.new_password)
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        self.repository
            .set_password_hash(&self.user_id, &password_hash)
            .await
    }

    async fn restore(&self, prior: &PasswordHash) -> Result<(), CredentialStoreError> {
        self.repository.set_password_hash(&self.user_id, prior).await
    }
}

struct ReplaceEmail<R> {
    repository: R,
    user_id: UserId,
    new_email: Email,
}

#[async_trait]
impl<R: CredentialRepository> Compensable for ReplaceEmail<R> {
    type Prior = Email;

    async fn apply(&self) -> Result<(), CredentialStoreError> {
        self.repository.set_email(&self.user_id, &self.new_email).await
    }

    async fn restore(&self, prior: &Email) -> Result<(), CredentialStoreError> {
        self.repository.set_email(&self.user_id, prior).await
    }
}
