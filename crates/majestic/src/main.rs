//! majestic CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "majestic")]
#[command(version)]
#[command(about = "majestic blog generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site settings against the schema
    Check {
        /// Settings file (merged over the built-in defaults)
        #[arg(short = 's', long, default_value = "settings.json")]
        settings: PathBuf,

        /// Validate the file alone, without the built-in defaults
        #[arg(long)]
        no_defaults: bool,
    },

    /// Parse a content file and list its documents
    Inspect {
        /// Content file (a single document, or several concatenated
        /// with the separator token)
        file: PathBuf,

        /// Separator token between documents
        #[arg(long, default_value = commands::inspect::DEFAULT_SEPARATOR)]
        separator: String,

        /// Print parsed documents as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "majestic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            settings,
            no_defaults,
        } => commands::check::execute(&settings, no_defaults),
        Commands::Inspect {
            file,
            separator,
            json,
        } => commands::inspect::execute(&file, &separator, json),
    }
}
