//! Concurrent per-message access via DashMap.
//!
//! Each message owns disjoint state, so there is no cross-message
//! concurrency concern; mutations for one message are serialized under its
//! entry lock.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use anon_core::models::{Detection, Message};

/// Thread-safe store of reconciled messages, keyed by message id.
pub struct MessageStore {
    messages: Arc<DashMap<String, Message>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(DashMap::new()),
        }
    }

    /// Create a message with a generated id and return the id.
    pub fn create(&self, content: String, detections: Vec<Detection>) -> String {
        let id = Uuid::new_v4().to_string();
        self.messages
            .insert(id.clone(), Message::new(id.clone(), content, detections));
        id
    }

    /// Insert or replace a message under its own id.
    pub fn insert(&self, message: Message) {
        self.messages.insert(message.id.clone(), message);
    }

    /// Get a message by id (cloned snapshot).
    pub fn get(&self, id: &str) -> Option<Message> {
        self.messages.get(id).map(|r| r.clone())
    }

    /// Apply a closure to a stored message under its entry lock. Returns
    /// `None` if the id is unknown.
    pub fn with_message<T>(&self, id: &str, f: impl FnOnce(&mut Message) -> T) -> Option<T> {
        self.messages.get_mut(id).map(|mut entry| f(&mut entry))
    }

    /// Remove a single message.
    pub fn remove(&self, id: &str) -> Option<Message> {
        self.messages.remove(id).map(|(_, msg)| msg)
    }

    /// Destroy all messages. Messages live until the owning conversation is
    /// cleared; this is that point.
    pub fn clear(&self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn message_ids(&self) -> Vec<String> {
        self.messages.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
