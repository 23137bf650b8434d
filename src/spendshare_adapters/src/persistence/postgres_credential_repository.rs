use secrecy::{ExposeSecret, Secret};
use spendshare_core::{
    CredentialRecord, CredentialRepository, CredentialStoreError, Email, PasswordHash, Token,
    UserId,
};
use sqlx::{FromRow, PgPool, postgres::PgQueryResult};

#[derive(FromRow)]
struct CredentialRow {
    user_id: String,
    email: String,
    password_hash: String,
    refresh_token: String,
    email_verified: bool,
}

impl TryFrom<CredentialRow> for CredentialRecord {
    type Error = CredentialStoreError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        Ok(CredentialRecord {
            user_id: UserId::from(row.user_id),
            email,
            password_hash: PasswordHash::new(Secret::from(row.password_hash)),
            refresh_token: Token::from(row.refresh_token),
            email_verified: row.email_verified,
        })
    }
}

/// Credential rows in the `credentials` table.
///
/// The `UNIQUE` constraint on `email` is what actually guarantees one
/// account per address; violations come back as `UserAlreadyExists`.
#[derive(Clone)]
pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        PostgresCredentialRepository { pool }
    }
}

fn map_write_error(e: sqlx::Error) -> CredentialStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return CredentialStoreError::UserAlreadyExists;
        }
    }
    CredentialStoreError::UnexpectedError(e.to_string())
}

fn require_row(result: PgQueryResult) -> Result<(), CredentialStoreError> {
    if result.rows_affected() == 0 {
        return Err(CredentialStoreError::UserNotFound);
    }
    Ok(())
}

#[async_trait::async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    #[tracing::instrument(name = "Retrieving credentials by id from PostgreSQL", skip_all)]
    async fn find_by_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
                SELECT user_id, email, password_hash, refresh_token, email_verified
                FROM credentials
                WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        row.map(CredentialRecord::try_from).transpose()
    }

    #[tracing::instrument(name = "Retrieving credentials by email from PostgreSQL", skip_all)]
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
                SELECT user_id, email, password_hash, refresh_token, email_verified
                FROM credentials
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        row.map(CredentialRecord::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding credentials to PostgreSQL", skip_all)]
    async fn insert(&self, record: CredentialRecord) -> Result<(), CredentialStoreError> {
        sqlx::query(
            r#"
                INSERT INTO credentials (user_id, email, password_hash, refresh_token, email_verified)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.user_id.as_str())
        .bind(record.email.as_ref().expose_secret())
        .bind(record.password_hash.as_ref().expose_secret())
        .bind(record.refresh_token.as_str())
        .bind(record.email_verified)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "Deleting credentials from PostgreSQL", skip_all)]
    async fn delete(&self, user_id: &UserId) -> Result<(), CredentialStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM credentials
                WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        require_row(result)
    }

    #[tracing::instrument(name = "Set new email", skip_all)]
    async fn set_email(&self, user_id: &UserId, email: &Email) -> Result<(), CredentialStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE credentials
                SET email = $1
                WHERE user_id = $2
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        require_row(result)
    }

    #[tracing::instrument(name = "Set new password hash", skip_all)]
    async fn set_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &PasswordHash,
    ) -> Result<(), CredentialStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE credentials
                SET password_hash = $1
                WHERE user_id = $2
            "#,
        )
        .bind(password_hash.as_ref().expose_secret())
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        require_row(result)
    }

    #[tracing::instrument(name = "Set new refresh token", skip_all)]
    async fn set_refresh_token(
        &self,
        user_id: &UserId,
        refresh_token: &Token,
    ) -> Result<(), CredentialStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE credentials
                SET refresh_token = $1
                WHERE user_id = $2
            "#,
        )
        .bind(refresh_token.as_str())
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        require_row(result)
    }
}
