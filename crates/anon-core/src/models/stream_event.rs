use serde::{Deserialize, Serialize};

/// One typed transport event, as streamed by the anonymization backend.
///
/// The engine's only dependencies are the concatenation of `content` events
/// and the `complete` event's optional final text and detection list;
/// everything else is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    /// Progress line, e.g. "Processing chunk 2/5".
    Status { message: String },
    /// Incremental model reasoning.
    Thinking { content: String },
    /// Incremental redacted output text.
    Content { content: String },
    /// Terminal success event.
    Complete {
        /// Authoritative final text, when the backend supplies one. When
        /// absent the accumulated content must be reconstructed instead.
        #[serde(default)]
        anonymized_text: Option<String>,
        #[serde(default)]
        reasoning: Option<ReasoningEnvelope>,
    },
    /// Terminal failure event.
    Error { message: String },
}

/// `reasoning` payload of a `complete` event. Detection records arrive
/// loosely typed and are validated at the ingestion boundary, so they are
/// kept as raw JSON here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReasoningEnvelope {
    #[serde(default)]
    pub thinking: Option<String>,
    #[serde(default)]
    pub detected_pii: Vec<serde_json::Value>,
}
