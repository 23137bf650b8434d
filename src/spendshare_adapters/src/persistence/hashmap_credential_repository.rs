use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use spendshare_core::{
    CredentialRecord, CredentialRepository, CredentialStoreError, Email, PasswordHash, Token,
    UserId,
};

/// In-memory credential rows keyed by user id.
///
/// Email uniqueness is checked and enforced under the same write lock as
/// the write itself.
#[derive(Default, Clone)]
pub struct HashMapCredentialRepository {
    records: Arc<RwLock<HashMap<UserId, CredentialRecord>>>,
}

impl HashMapCredentialRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn email_taken(
        records: &HashMap<UserId, CredentialRecord>,
        email: &Email,
        owner: &UserId,
    ) -> bool {
        records
            .values()
            .any(|record| &record.email == email && &record.user_id != owner)
    }
}

#[async_trait::async_trait]
impl CredentialRepository for HashMapCredentialRepository {
    async fn find_by_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let records = self.records.read().await;
        Ok(records.get(user_id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|record| &record.email == email)
            .cloned())
    }

    async fn insert(&self, record: CredentialRecord) -> Result<(), CredentialStoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.user_id)
            || Self::email_taken(&records, &record.email, &record.user_id)
        {
            return Err(CredentialStoreError::UserAlreadyExists);
        }
        records.insert(record.user_id.clone(), record);
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), CredentialStoreError> {
        let mut records = self.records.write().await;
        records
            .remove(user_id)
            .ok_or(CredentialStoreError::UserNotFound)?;
        Ok(())
    }

    async fn set_email(&self, user_id: &UserId, email: &Email) -> Result<(), CredentialStoreError> {
        let mut records = self.records.write().await;
        if Self::email_taken(&records, email, user_id) {
            return Err(CredentialStoreError::UserAlreadyExists);
        }
        let record = records
            .get_mut(user_id)
            .ok_or(CredentialStoreError::UserNotFound)?;
        record.email = email.clone();
        Ok(())
    }

    async fn set_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &PasswordHash,
    ) -> Result<(), CredentialStoreError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(user_id)
            .ok_or(CredentialStoreError::UserNotFound)?;
        record.password_hash = password_hash.clone();
        Ok(())
    }

    async fn set_refresh_token(
        &self,
        user_id: &UserId,
        refresh_token: &Token,
    ) -> Result<(), CredentialStoreError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(user_id)
            .ok_or(CredentialStoreError::UserNotFound)?;
        record.refresh_token = refresh_token.clone();
        Ok(())
    }
}
