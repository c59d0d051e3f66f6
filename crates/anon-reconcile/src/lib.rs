//! # anon-reconcile
//!
//! The detection/text reconciliation engine: keeps placeholder positions,
//! detection records, and user-toggled visibility state mutually consistent
//! as the user tags new spans, retags, replaces all occurrences of a phrase,
//! and toggles visibility of individual or grouped redactions.
//!
//! All operations are pure transforms over a `(text, detections, inactive)`
//! triple: they take a message snapshot and return a new one, which isolates
//! the algorithms from any UI framework. The engine never performs detection
//! itself; it only reconciles pre-supplied detections against the text it
//! is given.

pub mod activation;
pub mod export;
pub mod replace_all;
pub mod resolver;
pub mod store;
pub mod tagging;

pub use store::MessageStore;
pub use tagging::TagOutcome;
