use chrono::Local;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use config::Config;

use armory::auth;
use armory::catalog::CatalogStore;
use armory::console::{Console, StdConsole};
use armory::interrupt;
use armory::launch::Launcher;
use armory::menu::MenuController;
use armory::ui;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("armory")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("armory.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Route Ctrl-C to a graceful shutdown. With a child process active the
/// handler only sets the interrupt flag: the child shares the foreground
/// process group, receives its own SIGINT, and the blocked launcher wait
/// returns, after which the session loop exits through the summary path.
/// With no child active the session is blocked on stdin, so the handler
/// prints the summary itself.
fn install_interrupt_handler(started_at: chrono::DateTime<Local>) -> Result<()> {
    ctrlc::set_handler(move || {
        interrupt::request();
        if !interrupt::child_active() {
            let mut console = StdConsole::default();
            console.say("");
            console.say(&"⚠️  Interrupt received, shutting down".yellow().bold().to_string());
            ui::exit_summary(&mut console, started_at);
            std::process::exit(130);
        }
    })
    .context("Failed to install interrupt handler")
}

fn run_session(cli: &Cli, config: &Config) -> Result<()> {
    let started_at = Local::now();
    let project_root = config.project_root()?;
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| project_root.join(&config.paths.catalog));

    info!(
        "Starting session: root={}, catalog={}",
        project_root.display(),
        catalog_path.display()
    );

    let store = CatalogStore::new(catalog_path);
    let launcher = Launcher::new(&project_root);
    let mut console = StdConsole::new(&config.terminal.user, &config.terminal.hostname);

    install_interrupt_handler(started_at)?;

    console.clear();
    ui::welcome(&mut console, env!("CARGO_PKG_VERSION"), started_at);

    if !cli.no_auth
        && !auth::authenticate(&mut console, &config.auth.password, config.auth.max_attempts)?
    {
        println!("{}", "❌ Authentication failed, exiting".red().bold());
        std::process::exit(1);
    }

    let mut controller = MenuController::new(&store, &launcher, &mut console);
    controller.run().context("Session failed")?;
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if cli.verbose {
        println!("{}", "Verbose mode enabled".yellow());
    }

    info!("Starting with config from: {:?}", cli.config);

    run_session(&cli, &config).context("Application failed")?;

    Ok(())
}
