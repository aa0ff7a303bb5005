use crate::app::App;
use anyhow::{Result, bail};
use tarjama_core::translation::find_language;

pub async fn run(app: &App, text: String, from: String, to: String, swap: bool) -> Result<()> {
    for code in [&from, &to] {
        if find_language(code).is_none() {
            bail!("Unsupported language '{}'. Run `tarjama languages` for the list.", code);
        }
    }

    let mut controller = app.controller();
    controller.set_source_lang(from);
    controller.set_to_lang(to);
    if swap {
        controller.swap_languages();
    }
    controller.set_source_text(text);

    let identity = app.account.current().await;
    controller
        .translate(app.gateway.as_ref(), identity.as_ref())
        .await?;

    let state = controller.state();
    println!("[{} -> {}]", state.source_lang, state.to_lang);
    println!("{}", state.translated_text);

    if controller.can_correct() {
        println!();
        println!("Not right? Find it with `tarjama history` and fix it with `tarjama correct`.");
    }

    Ok(())
}
