//! Data model for one redacted message and its surrounding protocol.

mod detection;
mod message;
mod snapshot;
mod span;
mod stats;
mod stream_event;

pub use detection::Detection;
pub use message::{Message, MessageStatus};
pub use snapshot::ExportSnapshot;
pub use span::{Span, SpanKind};
pub use stats::RedactionStats;
pub use stream_event::{ReasoningEnvelope, StreamEvent};
