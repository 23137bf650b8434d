//! Compensating transactions.
//!
//! The credential store has no multi-statement transactions, so a protocol
//! that must change two things (an email and the refresh token, say) performs
//! two independent writes and, if the second one fails, undoes the first.
//!
//! A write is represented by a [`CompensatingTransaction`]: a value built by a
//! factory that reads the current state of the target *before* returning, and
//! that can later `perform` the change or `rollback` to the state it read.
//!
//! Usage contract:
//!
//! - `perform` is called at most once, and `rollback` at most once after it.
//! - `rollback` is only used to undo a successful `perform` when a *later*
//!   write in the same protocol step failed. A failed `perform` wrote nothing
//!   and needs no compensation.
//! - If the snapshot read failed, `perform` and `rollback` both return that
//!   same error without touching storage.

use async_trait::async_trait;

use crate::ports::repositories::CredentialStoreError;

pub type BoxedTransaction = Box<dyn CompensatingTransaction>;

#[async_trait]
pub trait CompensatingTransaction: Send + Sync {
    /// Apply the new value.
    async fn perform(&self) -> Result<(), CredentialStoreError>;
    /// Reapply the value captured at construction.
    async fn rollback(&self) -> Result<(), CredentialStoreError>;
}

/// A single write and its inverse, given the prior state.
#[async_trait]
pub trait Compensable: Send + Sync {
    /// The state captured before the write.
    type Prior: Send + Sync;

    async fn apply(&self) -> Result<(), CredentialStoreError>;
    async fn restore(&self, prior: &Self::Prior) -> Result<(), CredentialStoreError>;
}

/// Binds a [`Compensable`] write to the snapshot read for it.
pub struct SnapshotTransaction<A: Compensable> {
    action: A,
    snapshot: Result<A::Prior, CredentialStoreError>,
}

impl<A: Compensable> SnapshotTransaction<A> {
    /// `snapshot` is the outcome of the "before" read, which the caller has
    /// already awaited. Nothing is written here.
    pub fn new(action: A, snapshot: Result<A::Prior, CredentialStoreError>) -> Self {
        Self { action, snapshot }
    }

    pub fn boxed(self) -> BoxedTransaction
    where
        A: 'static,
    {
        Box::new(self)
    }
}

#[async_trait]
impl<A: Compensable> CompensatingTransaction for SnapshotTransaction<A> {
    async fn perform(&self) -> Result<(), CredentialStoreError> {
        match &self.snapshot {
            Ok(_) => self.action.apply().await,
            Err(e) => Err(e.clone()),
        }
    }

    async fn rollback(&self) -> Result<(), CredentialStoreError> {
        match &self.snapshot {
            Ok(prior) => self.action.restore(prior).await,
            Err(e) => Err(e.clone()),
        }
    }
}
