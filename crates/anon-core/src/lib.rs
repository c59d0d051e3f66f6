//! # anon-core
//!
//! Foundation crate for the ChatANON redaction reconciliation engine.
//! Defines the detection/message data model, error taxonomy, and the
//! entity-type tables shared by every other crate in the workspace.

pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use errors::{AnonError, AnonResult, ReconcileError, StreamError};
pub use models::{Detection, Message, MessageStatus, Span, SpanKind, StreamEvent};
