//! Error taxonomy for the reconciliation engine.
//!
//! No condition here is process-fatal: every failure is scoped to a single
//! message and is locally recoverable by re-issuing the operation with
//! corrected input.

mod reconcile_error;
mod stream_error;

pub use reconcile_error::ReconcileError;
pub use stream_error::StreamError;

/// Umbrella error for all engine operations.
#[derive(Debug, thiserror::Error)]
pub enum AnonError {
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}

/// Result alias used across the workspace.
pub type AnonResult<T> = Result<T, AnonError>;
