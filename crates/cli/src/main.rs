use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use stronghold_core::{DEFAULT_HTTP_PORT, PoolSettings};
use stronghold_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "stronghold")]
#[command(about = "Trading-card set catalog and print sheet server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Keep sets in process memory instead of PostgreSQL
        #[arg(long)]
        memory: bool,
    },
    /// Create or update the database schema
    Migrate,
    /// Create a set from a "Name - Number" text file
    Import {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        game: String,
        #[arg(short, long)]
        code: Option<String>,
        #[arg(short, long)]
        total_cards: Option<i64>,
        file: PathBuf,
    },
    /// List sets as JSON
    List {
        #[arg(short, long)]
        game: Option<String>,
    },
    /// Print the double-sided sheet plan for a set as JSON
    Print { set_id: String },
    /// Write a set's cards as a "Name - Number" list
    Export { set_id: String },
}

fn get_database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

async fn open_postgres() -> Result<Arc<StorageBackend>> {
    let url = get_database_url()?;
    let storage = StorageBackend::new_postgres(&url, PoolSettings::from_env()).await?;
    Ok(Arc::new(storage))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, memory } => commands::serve::run(port, host, memory).await?,
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Import { name, game, code, total_cards, file } => {
            commands::import::run(name, game, code, total_cards, file).await?;
        },
        Commands::List { game } => commands::list::run(game).await?,
        Commands::Print { set_id } => commands::print::run(set_id).await?,
        Commands::Export { set_id } => commands::export::run(set_id).await?,
    }

    Ok(())
}
