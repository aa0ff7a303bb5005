use super::{format_record, with_login_hint};
use crate::app::App;
use anyhow::{Context, Result, bail};
use tarjama_core::translation::GuestTranslationLog;

pub async fn list(app: &App, local: bool) -> Result<()> {
    if local {
        let entries = app.guest_log.entries();
        if entries.is_empty() {
            println!("No local translations.");
        }
        for (i, record) in entries.iter().enumerate() {
            println!("{}", format_record(i + 1, record));
        }
        return Ok(());
    }

    let identity = app.account.current().await;
    if identity.is_none() {
        println!("Log in to see your translation history.");
        return Ok(());
    }

    let mut selector = app.history_selector();
    let entries = selector
        .fetch_history(identity.as_ref())
        .await
        .map_err(with_login_hint)?;
    if entries.is_empty() {
        println!("No translations yet.");
    }
    for (i, record) in entries.iter().enumerate() {
        println!("{}", format_record(i + 1, record));
    }
    Ok(())
}

/// Selects the `index`-th history entry (1-based) and submits `text` as its
/// correction.
pub async fn correct(app: &App, index: usize, text: String) -> Result<()> {
    let Some(identity) = app.account.current().await else {
        bail!("Log in to correct translations.");
    };
    if index == 0 {
        bail!("History positions start at 1.");
    }

    let mut selector = app.history_selector();
    selector
        .fetch_history(Some(&identity))
        .await
        .map_err(with_login_hint)?;

    let mut controller = app.controller();
    selector
        .select_index(index - 1, &mut controller)
        .context("Run `tarjama history` to see valid positions")?;

    controller.edit_correction(text);
    let saved = controller
        .submit_correction(app.gateway.as_ref(), Some(&identity))
        .await
        .map_err(with_login_hint)?;

    println!("Correction saved.");
    println!("{}", format_record(index, &saved));
    Ok(())
}
