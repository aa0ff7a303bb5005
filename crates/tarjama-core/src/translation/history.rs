//! Helpers over translation history lists.

use super::model::TranslationRecord;

/// Number of leading query characters matched against past corrections.
const CONTEXT_PREFIX_CHARS: usize = 50;

/// Sorts records by timestamp, most recent first.
///
/// Records whose timestamp cannot be parsed go last, keeping their relative
/// order.
pub fn sort_most_recent_first(records: &mut [TranslationRecord]) {
    records.sort_by(|a, b| b.parsed_timestamp().cmp(&a.parsed_timestamp()));
}

/// True when a history entry carries both texts and can be shown/selected.
pub fn is_displayable(record: &TranslationRecord) -> bool {
    !record.source_text.is_empty() && !record.translated_text.is_empty()
}

/// Builds hint lines from past corrections relevant to `text`.
///
/// A correction is relevant when its source text contains the first 50
/// characters of `text`, compared case-insensitively. Returns an empty string
/// when nothing matches.
pub fn correction_context(history: &[TranslationRecord], text: &str) -> String {
    let needle: String = text
        .to_lowercase()
        .chars()
        .take(CONTEXT_PREFIX_CHARS)
        .collect();

    history
        .iter()
        .filter(|r| r.is_correction && !r.source_text.is_empty())
        .filter(|r| r.source_text.to_lowercase().contains(&needle))
        .map(|r| {
            format!(
                "Original: \"{}\" -> Corrected: \"{}\"",
                r.source_text, r.translated_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
