//! # anon-stream
//!
//! The streaming boundary of the reconciliation engine. The transport
//! delivers an ordered, non-reorderable sequence of typed events
//! (`status | thinking | content | complete | error`); this crate parses
//! and validates them, accumulates per-message state, and finalizes each
//! stream into a reconciled message, reconstructing a best-effort final
//! text when the terminal event carries detections but no authoritative
//! text.

pub mod ingest;
pub mod reconstruct;
pub mod session;

pub use ingest::{IngestReport, RejectedRecord};
pub use session::StreamSession;
