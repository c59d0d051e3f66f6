//! Replace-All Engine. Tags every occurrence of a phrase at once, reusing
//! one placeholder value across all of them.

use regex::Regex;

use anon_core::constants::DEFAULT_CONFIDENCE;
use anon_core::errors::ReconcileError;
use anon_core::models::{Detection, Message};

use crate::resolver;
use crate::tagging::{choose_placeholder, insert_in_text_order, renumber, TagOutcome};

/// Tag every case-insensitive literal occurrence of `phrase` as entity type
/// `kind`, inserting one detection per newly covered position, in ascending
/// text order, with a single renumbering pass at the end.
///
/// Idempotent: on already-tagged text the phrase no longer matches, so a
/// re-invocation reports [`ReconcileError::TargetNotFound`] and creates no
/// duplicate detections.
pub fn replace_all(
    message: &Message,
    phrase: &str,
    kind: &str,
) -> Result<TagOutcome, ReconcileError> {
    if phrase.is_empty() {
        return Err(ReconcileError::TargetNotFound {
            target: phrase.to_string(),
        });
    }
    // The phrase is escaped before matching; special regex characters in
    // user input are literal text, never syntax.
    let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(phrase))) else {
        return Err(ReconcileError::TargetNotFound {
            target: phrase.to_string(),
        });
    };

    let placeholder = choose_placeholder(&message.content, &message.detections, phrase, kind);

    // Existing placeholder tokens are opaque: a phrase match inside one is
    // never a real occurrence.
    let token_spans: Vec<(usize, usize)> = resolver::bind_tokens(&message.content, &message.detections)
        .into_iter()
        .map(|b| (b.start, b.end))
        .collect();

    // Single left-to-right rewrite, recording where each new token lands in
    // the rewritten text together with the exact slice it replaced.
    let mut rewritten = String::with_capacity(message.content.len());
    let mut new_tokens: Vec<(usize, String)> = Vec::new();
    let mut last = 0;
    for m in re.find_iter(&message.content) {
        if m.start() < last {
            continue;
        }
        if token_spans
            .iter()
            .any(|&(s, e)| m.start() < e && m.end() > s)
        {
            continue;
        }
        rewritten.push_str(&message.content[last..m.start()]);
        new_tokens.push((rewritten.len(), m.as_str().to_string()));
        rewritten.push_str(&placeholder);
        last = m.end();
    }
    if new_tokens.is_empty() {
        return Err(ReconcileError::TargetNotFound {
            target: phrase.to_string(),
        });
    }
    rewritten.push_str(&message.content[last..]);

    let mut next = message.clone();
    next.content = rewritten;
    let inserted = new_tokens.len();
    for (offset, matched) in new_tokens {
        let detection = Detection::new(
            kind,
            matched,
            placeholder.clone(),
            DEFAULT_CONFIDENCE,
            0,
        )
        .with_explanation(format!("Manually tagged as {kind} (replace all)"));
        insert_in_text_order(&mut next, detection, offset);
    }
    renumber(&mut next.detections);

    tracing::debug!(
        message_id = %next.id,
        %placeholder,
        kind,
        inserted,
        "replaced all occurrences"
    );
    Ok(TagOutcome {
        message: next,
        placeholder,
        inserted,
    })
}
