//! CLI administration tool for shorturl.
//!
//! Works directly against the configured storage, without the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Create the urls table (safe to repeat)
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show a stored record
//! cargo run --bin admin -- show 327c3fda
//!
//! # Print the id a URL maps to
//! cargo run --bin admin -- id https://example.com
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`shorturl::config`].

use shorturl::application::services::ShortUrlService;
use shorturl::config::{self, StorageBackend};
use shorturl::domain::repositories::ShortUrlRepository;
use shorturl::error::AppError;
use shorturl::server::connect_repository;
use shorturl::utils::id_generator::{generate_id, is_well_formed};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shorturl storage.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show the stored record for an id
    Show {
        /// Short id, e.g. 327c3fda
        id: String,
    },

    /// Print the short id a URL maps to (no storage access)
    Id {
        /// Original URL, hashed exactly as given
        url: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the urls table if it does not exist
    Init,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Db { action } => handle_db_action(action, connect().await?).await?,
        Commands::Show { id } => show_record(connect().await?, &id).await?,
        Commands::Id { url } => println!("{}", generate_id(&url)),
    }

    Ok(())
}

/// Connects to the storage named by the environment.
async fn connect() -> Result<Arc<dyn ShortUrlRepository>> {
    let config = config::load_from_env()?;
    if config.storage_backend == StorageBackend::Memory {
        println!(
            "{}",
            "⚠️  STORAGE_BACKEND=memory: this process sees an empty store".yellow()
        );
    }

    connect_repository(&config)
        .await
        .context("Failed to connect to storage")
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, repo: Arc<dyn ShortUrlRepository>) -> Result<()> {
    match action {
        DbAction::Init => {
            println!("{}", "🛠️  Initializing database...".bright_blue());

            repo.initialize().await?;

            println!("{}", "✅ Database initialized".green().bold());
        }
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repo.ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}

/// Prints the record stored under `id`.
async fn show_record(repo: Arc<dyn ShortUrlRepository>, id: &str) -> Result<()> {
    if !is_well_formed(id) {
        println!(
            "{}",
            format!("⚠️  '{id}' is not an 8-character lowercase hex id").yellow()
        );
    }

    let service = ShortUrlService::new(repo);

    match service.get_short_url(id).await {
        Ok(record) => {
            println!("{}", "🔗 Short URL".bright_blue().bold());
            println!();
            println!("  Id:           {}", record.id.bright_white());
            println!("  Original URL: {}", record.original_url.bright_white());
            println!(
                "  Accesses:     {}",
                record.access_count.to_string().bright_white()
            );
            println!();
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("❌ No short URL with id '{id}'").red());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
