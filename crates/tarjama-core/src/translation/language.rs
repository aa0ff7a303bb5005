//! Languages offered by the translation backend.

use serde::Serialize;

/// Default source language on a fresh session.
pub const DEFAULT_SOURCE_LANG: &str = "ar-TD";
/// Default target language on a fresh session.
pub const DEFAULT_TARGET_LANG: &str = "fr";

/// A selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const SUPPORTED: &[Language] = &[
    Language {
        code: "fr",
        name: "Français",
    },
    Language {
        code: "ar-TD",
        name: "Arabe Tchadien",
    },
];

/// Languages the backend has models for.
pub fn supported_languages() -> &'static [Language] {
    SUPPORTED
}

/// Looks up a supported language by code.
pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED.iter().find(|lang| lang.code == code)
}
