use spendshare_core::{BoxedTransaction, CredentialStoreError, TokenError};
use thiserror::Error;

/// Infrastructure failures surfaced by the session protocols.
///
/// These are never retried here; the cause is kept for logging.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("Credential store error: {0}")]
    CredentialStore(#[from] CredentialStoreError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Rollback failed after write error ({cause}): {rollback}; credential record is inconsistent")]
    RollbackFailed {
        cause: CredentialStoreError,
        rollback: CredentialStoreError,
    },
}

/// Undo `first` after a later write in the same step failed with `cause`.
///
/// Exactly one rollback attempt is made. If it fails too, the record is left
/// half-updated and the returned error says so.
pub(crate) async fn compensate(
    first: &BoxedTransaction,
    cause: CredentialStoreError,
) -> InternalError {
    match first.rollback().await {
        Ok(()) => {
            tracing::warn!(error = %cause, "Second write failed, first write rolled back");
            InternalError::CredentialStore(cause)
        }
        Err(rollback) => {
            tracing::error!(
                error = %cause,
                rollback_error = %rollback,
                "Rollback failed, credential record left inconsistent"
            );
            InternalError::RollbackFailed { cause, rollback }
        }
    }
}
