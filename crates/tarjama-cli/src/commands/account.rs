use crate::app::App;
use anyhow::Result;
use tarjama_core::identity::Credentials;

pub async fn login(app: &App, email: String, password: String) -> Result<()> {
    let identity = app.account.login(&Credentials::new(email, password)).await?;
    println!("Logged in as {}", identity.email);
    Ok(())
}

pub async fn signup(app: &App, email: String, password: String, confirm: String) -> Result<()> {
    app.account
        .signup(&Credentials::new(email, password), &confirm)
        .await?;
    println!("Account created. Log in with `tarjama login`.");
    Ok(())
}

pub async fn logout(app: &App) -> Result<()> {
    app.account.logout().await?;
    println!("Logged out.");
    Ok(())
}

pub async fn whoami(app: &App) {
    match app.account.current().await {
        Some(identity) => println!("{} (user {})", identity.email, identity.id),
        None => println!("Not logged in (guest)."),
    }
}
