//! CLI administration tool for short-links.
//!
//! Creates and inspects short links directly against PostgreSQL, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (generated code)
//! cargo run --bin admin -- link create https://example.com/some/long/path
//!
//! # Shorten a URL under a custom alias
//! cargo run --bin admin -- link create https://example.com --code promo2024
//!
//! # Inspect a mapping
//! cargo run --bin admin -- link show promo2024
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Database diagnostics
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! Database settings are read the same way as the server
//! (`DATABASE_URL` or the `DB_*` components) and validated the same way;
//! `STORAGE_BACKEND` is ignored.

use short_links::application::services::LinkRegistrar;
use short_links::config::{Config, load_postgres_from_env};
use short_links::domain::entities::ShortLink;
use short_links::infrastructure::persistence::PgLinkStore;
use short_links::prelude::LinkStore;
use short_links::server::connect_pool;
use short_links::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and inspect short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Register a URL and print its short code
    Create {
        /// Absolute http(s) URL to shorten
        url: String,

        /// Custom alias (letters and digits, 4-16 characters)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show the stored mapping for a code
    Show { code: String },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_postgres_from_env().context("Invalid configuration")?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    let pool = connect_pool(&config, &database_url).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let store = Arc::new(PgLinkStore::new(Arc::new(pool.clone())));

    match action {
        LinkAction::Create { url, code } => {
            let registrar = LinkRegistrar::new(
                store,
                Arc::new(RandomCodeGenerator::new(config.code_length)),
                config.code_max_attempts,
            );

            let link = registrar
                .register(&url, code.as_deref())
                .await
                .map_err(|e| anyhow::anyhow!("{}", e.detail()))?;

            println!("{}", "✓ Short link created".green().bold());
            println!();
            print_link(&link);
        }
        LinkAction::Show { code } => {
            let link = store
                .lookup(&code)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                .with_context(|| format!("No short link with code '{}'", code))?;

            print_link(&link);
        }
    }

    Ok(())
}

fn print_link(link: &ShortLink) {
    let kind = if link.is_custom { "custom" } else { "generated" };

    println!("  Code:    {} ({})", link.code.cyan().bold(), kind);
    println!("  Target:  {}", link.target_url);
    println!(
        "  Created: {}",
        link.created_at.to_rfc3339().bright_black()
    );
    println!("  Hits:    {}", link.hit_count.to_string().bright_green());
    println!();
}

/// Displays the number of links and the total hit count.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let store = PgLinkStore::new(Arc::new(pool.clone()));
    let links_count = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let custom_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM short_links WHERE is_custom")
            .fetch_one(pool)
            .await?;

    let hits_total: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(hit_count), 0)::BIGINT FROM short_links")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:   {} ({} custom)",
        links_count.to_string().bright_green().bold(),
        custom_count
    );
    println!("  Hits:    {}", hits_total.to_string().bright_green().bold());
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✓ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✓ Migrations applied".green().bold());
        }
    }

    Ok(())
}
