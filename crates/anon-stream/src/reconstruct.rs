//! Streaming reconstruction: derives a best-effort final text from the
//! accumulated raw stream when the terminal event supplies detections but
//! no authoritative text.
//!
//! Originals are substituted longest-first so a short original is never a
//! spurious substring match inside a longer one. The result is explicitly
//! an approximation: two originals that are substrings of one another in
//! ways length ordering cannot resolve, or raw text that diverged from the
//! model's true output, can still mis-substitute. Good enough for display
//! when nothing better exists, never authoritative.

use regex::{NoExpand, Regex};

use anon_core::models::Detection;

/// Apply every detection's replacement to `raw`, longest original first,
/// matching case-insensitively.
pub fn reconstruct(raw: &str, detections: &[Detection]) -> String {
    let mut ordered: Vec<&Detection> = detections
        .iter()
        .filter(|d| !d.original.is_empty())
        .collect();
    // Stable sort: equal lengths keep array order.
    ordered.sort_by(|a, b| b.original.len().cmp(&a.original.len()));

    let mut text = raw.to_string();
    for det in ordered {
        let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(&det.original))) else {
            continue;
        };
        text = re
            .replace_all(&text, NoExpand(det.replacement.as_str()))
            .into_owned();
    }
    text
}
