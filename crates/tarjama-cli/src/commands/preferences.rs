use crate::ThemeAction;
use crate::app::App;
use anyhow::Result;
use tarjama_core::theme::ThemePreference;
use tarjama_core::translation::{DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, supported_languages};

pub fn theme(app: &App, action: Option<ThemeAction>) -> Result<()> {
    let theme = match action {
        None => app.theme.current(),
        Some(ThemeAction::Toggle) => app.theme.toggle()?,
        Some(ThemeAction::Light) => {
            app.theme.set(ThemePreference::Light)?;
            ThemePreference::Light
        }
        Some(ThemeAction::Dark) => {
            app.theme.set(ThemePreference::Dark)?;
            ThemePreference::Dark
        }
    };
    println!("Theme: {}", theme);
    Ok(())
}

pub fn languages() {
    for lang in supported_languages() {
        let mut notes = Vec::new();
        if lang.code == DEFAULT_SOURCE_LANG {
            notes.push("default source");
        }
        if lang.code == DEFAULT_TARGET_LANG {
            notes.push("default target");
        }
        if notes.is_empty() {
            println!("{:<6} {}", lang.code, lang.name);
        } else {
            println!("{:<6} {} ({})", lang.code, lang.name, notes.join(", "));
        }
    }
}
