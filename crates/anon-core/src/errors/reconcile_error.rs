/// Errors from the reconciliation operations (manual tagging, replace-all).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// The tagging target is absent from the current message text.
    /// The operation must be a no-op: no state is mutated.
    #[error("target substring not found in message text: {target:?}")]
    TargetNotFound { target: String },
}
