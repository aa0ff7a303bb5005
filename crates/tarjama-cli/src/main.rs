use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tarjama_core::translation::{DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};
use tarjama_infrastructure::{ConfigService, TarjamaPaths};

mod app;
mod commands;
mod logging;

use app::App;

#[derive(Parser)]
#[command(name = "tarjama")]
#[command(about = "Tarjama - Chadian Arabic / French translation with community corrections", long_about = None)]
struct Cli {
    /// Directory holding config.toml, storage.json and logs (defaults to the platform config dir)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a text
    Translate {
        text: String,
        /// Source language code
        #[arg(long, default_value = DEFAULT_SOURCE_LANG)]
        from: String,
        /// Target language code
        #[arg(long, default_value = DEFAULT_TARGET_LANG)]
        to: String,
        /// Swap source and target languages before translating
        #[arg(long)]
        swap: bool,
    },
    /// Log in and remember the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Signup {
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List past translations, newest first
    History {
        /// Show translations made without an account on this machine
        #[arg(long)]
        local: bool,
    },
    /// Correct the history entry at INDEX (as listed by `history`)
    Correct { index: usize, text: String },
    /// Show or change the theme preference
    Theme { action: Option<ThemeAction> },
    /// List supported languages
    Languages,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Toggle,
    Light,
    Dark,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TarjamaPaths::new(cli.home.as_deref());
    let config = ConfigService::new(paths.config_file().context("Failed to resolve config path")?)
        .load()?;
    let _guard = logging::init(
        &config.logging.level,
        &paths.log_dir().context("Failed to resolve log directory")?,
    )?;

    let app = App::bootstrap(&paths, &config)?;

    match cli.command {
        Commands::Translate {
            text,
            from,
            to,
            swap,
        } => commands::translate::run(&app, text, from, to, swap).await?,
        Commands::Login { email, password } => {
            commands::account::login(&app, email, password).await?
        }
        Commands::Signup {
            email,
            password,
            confirm,
        } => commands::account::signup(&app, email, password, confirm).await?,
        Commands::Logout => commands::account::logout(&app).await?,
        Commands::Whoami => commands::account::whoami(&app).await,
        Commands::History { local } => commands::history::list(&app, local).await?,
        Commands::Correct { index, text } => commands::history::correct(&app, index, text).await?,
        Commands::Theme { action } => commands::preferences::theme(&app, action)?,
        Commands::Languages => commands::preferences::languages(),
    }

    Ok(())
}
