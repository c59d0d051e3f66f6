//! Per-message stream session: applies the ordered event sequence and
//! finalizes into a reconciled [`Message`].
//!
//! Events for one message are serialized; no two mutations interleave.
//! Cancellation keeps the last successfully applied state intact and only
//! clears the processing flag; prior chunks are never rolled back.

use anon_core::errors::StreamError;
use anon_core::models::{Message, MessageStatus, ReasoningEnvelope, StreamEvent};

use crate::ingest::{self, IngestReport};
use crate::reconstruct;

/// State machine for one streaming message.
#[derive(Debug, Clone)]
pub struct StreamSession {
    message_id: String,
    content: String,
    thinking: String,
    status_line: Option<String>,
    processing: bool,
    skipped_chunks: usize,
    report: IngestReport,
    message: Option<Message>,
}

impl StreamSession {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            content: String::new(),
            thinking: String::new(),
            status_line: None,
            processing: true,
            skipped_chunks: 0,
            report: IngestReport::new(),
            message: None,
        }
    }

    /// Apply one raw chunk payload. A malformed payload is skipped and
    /// reported; the stream continues.
    pub fn apply_raw(&mut self, raw: &str) -> Result<(), StreamError> {
        match ingest::parse_event(raw) {
            Ok(event) => self.apply(event),
            Err(err) => {
                self.skipped_chunks += 1;
                tracing::warn!(
                    message_id = %self.message_id,
                    error = %err,
                    "skipped malformed stream chunk"
                );
                Err(err)
            }
        }
    }

    /// Apply one typed event. Events arriving after completion, failure, or
    /// cancellation are ignored.
    ///
    /// A terminal `error` event marks the message failed and is also
    /// surfaced to the caller; the engine never retries.
    pub fn apply(&mut self, event: StreamEvent) -> Result<(), StreamError> {
        if !self.processing {
            return Ok(());
        }
        match event {
            StreamEvent::Status { message } => {
                self.status_line = Some(message);
                Ok(())
            }
            StreamEvent::Thinking { content } => {
                self.thinking.push_str(&content);
                Ok(())
            }
            StreamEvent::Content { content } => {
                self.content.push_str(&content);
                Ok(())
            }
            StreamEvent::Complete {
                anonymized_text,
                reasoning,
            } => {
                self.finish(anonymized_text, reasoning);
                Ok(())
            }
            StreamEvent::Error { message } => {
                self.fail(message.clone());
                Err(StreamError::Terminal { message })
            }
        }
    }

    fn finish(&mut self, anonymized_text: Option<String>, reasoning: Option<ReasoningEnvelope>) {
        let raw_records = reasoning
            .as_ref()
            .map(|r| r.detected_pii.as_slice())
            .unwrap_or(&[]);
        let detections = ingest::coerce_detections(raw_records, &mut self.report);

        let text = match anonymized_text {
            Some(text) => text,
            // No authoritative final text: approximate one from the
            // accumulated raw stream.
            None => reconstruct::reconstruct(&self.content, &detections),
        };

        let mut message = Message::new(self.message_id.clone(), text, detections);
        message.thinking = reasoning
            .and_then(|r| r.thinking)
            .or_else(|| (!self.thinking.is_empty()).then(|| self.thinking.clone()));
        message.status = MessageStatus::Complete;

        tracing::debug!(
            message_id = %self.message_id,
            detections = message.detections.len(),
            rejected = self.report.rejections().len(),
            "stream completed"
        );
        self.message = Some(message);
        self.processing = false;
    }

    fn fail(&mut self, error: String) {
        let mut message = Message::new(self.message_id.clone(), self.content.clone(), Vec::new());
        message.thinking = (!self.thinking.is_empty()).then(|| self.thinking.clone());
        message.status = MessageStatus::Failed { error };
        self.message = Some(message);
        self.processing = false;
    }

    /// Cancel mid-stream: the state applied so far stays intact, the session
    /// just stops processing.
    pub fn cancel(&mut self) {
        self.processing = false;
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thinking(&self) -> &str {
        &self.thinking
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status_line.as_deref()
    }

    pub fn skipped_chunks(&self) -> usize {
        self.skipped_chunks
    }

    pub fn report(&self) -> &IngestReport {
        &self.report
    }

    /// The finalized message, present once the stream completed or failed.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn into_message(self) -> Option<Message> {
        self.message
    }
}
