//! Rationale extractor.
//!
//! Picks the single most decision-relevant sentence out of a free-text
//! reasoning field.

/// Phrases that mark a sentence as explaining a decision, in scan order
pub const DECISION_PHRASES: &[&str] = &[
    "because",
    "due to",
    "in order to",
    "to ensure",
    "chosen to",
    "selected to",
    "prioritized",
    "optimized for",
    "designed for",
    "configured for",
    "focused on",
    "enables",
    "allows",
    "provides",
    "ensures",
    "guarantees",
    "supports",
];

/// Maximum characters kept before the ellipsis
pub const MAX_INSIGHT_CHARS: usize = 150;

/// Sentences at or under this many characters are skipped by the fallback
const MIN_FALLBACK_CHARS: usize = 30;

const SENTENCE_SEPARATOR: &str = ". ";
const ELLIPSIS: &str = "...";

/// Extract the key insight from `text`.
///
/// 1. The first sentence containing a decision phrase (case-insensitive),
///    terminated with a period.
/// 2. Otherwise the first sentence longer than 30 characters.
/// 3. Otherwise the whole trimmed text.
///
/// The result is cut to 150 characters plus `"..."` when longer. Empty input
/// yields an empty string. `context` only labels the trace event.
pub fn extract_key_insight(text: &str, context: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let sentences: Vec<&str> = text.split(SENTENCE_SEPARATOR).map(str::trim).collect();

    if let Some(sentence) = sentences.iter().find(|s| has_decision_phrase(s)) {
        let mut sentence = sentence.to_string();
        if !sentence.ends_with('.') {
            sentence.push('.');
        }
        tracing::trace!(component = module_path!(), context, "decision sentence matched");
        return truncate(&sentence);
    }

    if let Some(sentence) = sentences
        .iter()
        .find(|s| s.chars().count() > MIN_FALLBACK_CHARS)
    {
        tracing::trace!(component = module_path!(), context, "fell back to first long sentence");
        return truncate(sentence);
    }

    tracing::trace!(component = module_path!(), context, "fell back to full text");
    truncate(text)
}

fn has_decision_phrase(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    DECISION_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

/// Cut to [`MAX_INSIGHT_CHARS`] characters (not bytes) plus an ellipsis.
fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_INSIGHT_CHARS) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
