//! Warframe Tasks - track Warframe objectives from the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use warframe_tasks::cli::{self, Cli, Commands};
use warframe_tasks::profile;
use warframe_tasks::tui;

/// Logs go to a file so they never draw over the TUI.
fn init_logging() -> Result<()> {
    let path = profile::get_app_dir()?.join("debug.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warframe_tasks=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("WARFRAME_TASKS_DEBUG").is_ok() {
        init_logging()?;
    }

    let cli = Cli::parse();
    let profile = || {
        let profile = profile::resolve_profile(cli.profile.as_deref());
        tracing::debug!("Using profile {}", profile);
        profile
    };

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "wft", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Locations(args)) => cli::locations::run(args).await,
        Some(Commands::Add(args)) => cli::add::run(&profile(), args).await,
        Some(Commands::List(args)) => cli::list::run(&profile(), args).await,
        Some(Commands::Remove(args)) => cli::remove::run(&profile(), args).await,
        Some(Commands::Move(args)) => cli::reorder::run(&profile(), args).await,
        Some(Commands::Constant { command }) => cli::constant::run(&profile(), command).await,
        Some(Commands::Export(args)) => cli::backup::export(&profile(), args).await,
        Some(Commands::Import(args)) => cli::backup::import(&profile(), args).await,
        Some(Commands::Profile { command }) => cli::profile::run(command).await,
        None => tui::run(&profile()).await,
    }
}
