//! Shopfront CLI - Database migrations and store operations.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! shop-cli migrate
//!
//! # Change an order's status
//! shop-cli order set-status --id 42 --status shipped
//!
//! # Show an order
//! shop-cli order show --id 42
//!
//! # Print the catalog as served at GET /categories
//! shop-cli catalog list
//! ```
//!
//! All commands read `SHOPFRONT_DATABASE_URL` (or `DATABASE_URL`), loading
//! `.env` if present.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(author, version, about = "Shopfront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Inspect and update orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Inspect the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Overwrite an order's status
    SetStatus {
        /// Order ID
        #[arg(short, long)]
        id: i32,

        /// New status (accepted values are defined by the database schema)
        #[arg(short, long)]
        status: String,
    },
    /// Print an order as JSON
    Show {
        /// Order ID
        #[arg(short, long)]
        id: i32,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print the category tree as JSON
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopfront_cli=info,shopfront_storefront=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Order { action } => match action {
            OrderAction::SetStatus { id, status } => {
                commands::order::set_status(id, &status).await?;
            }
            OrderAction::Show { id } => commands::order::show(id).await?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list().await?,
        },
    }
    Ok(())
}
