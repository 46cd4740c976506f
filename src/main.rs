//! SkinTUI - Main entry point
//!
//! A skincare routine builder and AI product advisor with a clean,
//! modular TUI plus headless subcommands.

use anyhow::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use skintui::app::App;
use skintui::catalog::Catalog;
use skintui::chat::{AdvisorClient, FALLBACK_REPLY};
use skintui::cli::{Cli, Commands};
use skintui::config::AppConfig;
use skintui::error;
use skintui::routine::{generate_routine, SkinProfile};
use skintui::types::{AgeRange, SkinType};

/// Initialize the logger with appropriate settings.
///
/// Log lines go to `skintui.log` so they never corrupt the alternate
/// screen; `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("skintui.log")
    {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            // No writable log file; stderr is better than silence
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Main application entry point
fn main() -> Result<()> {
    init_logging();
    info!("SkinTUI starting up");

    let cli = Cli::parse_args();
    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Routine {
            skin_type,
            age,
            concerns,
            catalog,
        }) => {
            run_routine_command(&config, &skin_type, &age, &concerns, catalog.as_deref())?;
        }
        Some(Commands::Ask { message }) => {
            run_ask_command(&config, &message)?;
        }
        None => {
            info!("No command specified, launching TUI");
            run_tui(&config)?;
        }
    }

    Ok(())
}

/// Run the interactive TUI
fn run_tui(config: &AppConfig) -> Result<()> {
    // Load the catalog once; failures degrade to an empty catalog
    let catalog = Catalog::load_or_empty(&config.catalog_path);

    // A missing API key disables the advisor but never blocks the TUI
    let advisor = match AdvisorClient::from_env(config.chat.clone()) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("advisor disabled: {}", e);
            None
        }
    };

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    // Create and run application
    let mut app = App::new(catalog, advisor);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result?;
    Ok(())
}

/// Build a routine headlessly and print it
fn run_routine_command(
    config: &AppConfig,
    skin_type: &str,
    age: &str,
    concerns: &str,
    catalog_override: Option<&Path>,
) -> Result<()> {
    let parsed_skin_type: SkinType = skin_type.parse().unwrap_or_else(|_| {
        eprintln!("✗ Unknown skin type: {}", skin_type);
        eprintln!("  Valid values: oily, dry, combination, normal, sensitive");
        std::process::exit(1);
    });

    let parsed_age: AgeRange = age.parse().unwrap_or_else(|_| {
        eprintln!("✗ Unknown age range: {}", age);
        eprintln!("  Valid values: 13-19, 20-29, 30-39, 40-49, 50+");
        std::process::exit(1);
    });

    let catalog_path = catalog_override.unwrap_or(&config.catalog_path);
    let catalog = Catalog::load_or_empty(catalog_path);

    let profile = SkinProfile::new(parsed_skin_type, concerns, parsed_age);
    let routine = generate_routine(&catalog, &profile);
    info!("built routine with {} of 5 steps matched", routine.len());

    if routine.is_empty() {
        println!("No routine found for your skin profile. Try adjusting your inputs.");
        return Ok(());
    }

    println!("Your routine ({} of 5 steps matched):", routine.len());
    println!();
    for product in routine.iter() {
        println!("  {:<12} {}", product.step.to_string(), product.name);
        if !product.description.is_empty() {
            println!("               {}", product.description);
        }
    }

    Ok(())
}

/// One advisor round-trip without the TUI
fn run_ask_command(config: &AppConfig, message: &str) -> Result<()> {
    let client = match AdvisorClient::from_env(config.chat.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("cannot construct advisor client: {}", e);
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    match client.ask(message) {
        Ok(reply) => println!("{}", reply),
        Err(e) => {
            // Same degradation contract as the TUI: log the cause, show
            // the fixed fallback text
            error!("chat request failed: {}", e);
            println!("{}", FALLBACK_REPLY);
        }
    }

    Ok(())
}
