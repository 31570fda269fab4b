//! # quiz-nav CLI
//!
//! Command-line interface for the quiz application's route table.
//!
//! ## Usage
//!
//! - `quiz-nav` - Browse the routes interactively
//! - `quiz-nav routes` - List the route table
//! - `quiz-nav resolve /login` - Resolve URLs to routes
//! - `quiz-nav check` - Lint the route table
//! - `quiz-nav navigate Login back forward` - Replay a navigation sequence
//!
//! The history strategy defaults to web history and can be switched with
//! `--history hash` or `QUIZ_NAV_HISTORY=hash`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use quiz_nav_core::HistoryMode;
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;

use commands::{
    check_command, interactive_command, navigate_command, resolve_command, routes_command,
};
use config::CliConfigLoader;

/// quiz-nav - Route table tooling for the quiz application
#[derive(Parser)]
#[command(name = "quiz-nav")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect, resolve and browse the quiz application's routes")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// History strategy (web, hash, memory)
    #[arg(long, value_parser = parse_history_mode)]
    history: Option<HistoryMode>,

    /// Base path the application is served under
    #[arg(long)]
    base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve URLs against the route table
    Resolve {
        /// Browser URLs or router paths
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Check the route table for duplicates and a missing default route
    Check,

    /// Replay a navigation sequence (`back` and `forward` move through history)
    Navigate {
        /// URL to mount at before navigating
        #[arg(long)]
        from: Option<String>,

        /// Route names, paths, `back` or `forward`
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Browse the routes in a terminal UI
    Interactive {
        /// Start URL
        #[arg(long)]
        url: Option<String>,
    },
}

fn parse_history_mode(value: &str) -> Result<HistoryMode, String> {
    value.parse()
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(mode) = cli.history {
        loader = loader.with_history_override(mode);
    }

    if let Some(base) = &cli.base {
        loader = loader.with_base_override(base.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes { json }) => routes_command(config_loader, json).await,
        Some(Commands::Resolve { urls }) => resolve_command(config_loader, urls).await,
        Some(Commands::Check) => check_command(config_loader).await,
        Some(Commands::Navigate { from, targets }) => {
            navigate_command(config_loader, from, targets).await
        }
        Some(Commands::Interactive { url }) => interactive_command(config_loader, url).await,
        // Default to interactive mode
        None => interactive_command(config_loader, None).await,
    }
}
