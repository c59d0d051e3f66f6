use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One segment of resolved message text, for the rendering layer.
/// Offsets are byte offsets into the canonical text; the span list covers
/// the text exactly, with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanKind {
    /// Plain text between placeholder tokens.
    Text,
    /// A placeholder token bound to the detection at `detection`
    /// (array index == occurrence index).
    Placeholder { detection: usize, active: bool },
    /// A token with no matching detection. Rendered as inert literal text,
    /// with no toggle affordance.
    Literal,
}

impl Span {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, SpanKind::Placeholder { .. })
    }
}
