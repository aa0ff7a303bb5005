pub mod account;
pub mod history;
pub mod preferences;
pub mod translate;

use tarjama_core::TranslatorError;
use tarjama_core::translation::TranslationRecord;

/// One-line rendering of a translation, shared by `history` listings.
pub(crate) fn format_record(position: usize, record: &TranslationRecord) -> String {
    let marker = if record.is_correction { " (correction)" } else { "" };
    format!(
        "{:>3}. [{} -> {}] {} => {}{}",
        position, record.from_lang, record.to_lang, record.source_text, record.translated_text, marker
    )
}

/// Points at `tarjama login` when the backend rejected the stored token.
pub(crate) fn with_login_hint(err: TranslatorError) -> anyhow::Error {
    if err.is_unauthorized() {
        anyhow::anyhow!("{err}\nRun `tarjama login` to sign in again.")
    } else {
        err.into()
    }
}
