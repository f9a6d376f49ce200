use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::Settings;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Personas service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let mut settings = configuration::load_config().context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve(args) => {
            args.apply(&mut settings);
            web_server::run_server(&settings).await?;
        }
        Commands::Migrate(args) => {
            if let Some(database) = args.database {
                settings.database.filename = Some(database);
            }
            handle_migrate(&settings).await?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small REST service for storing personas.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve(ServeArgs),
    /// Create the database schema and exit.
    Migrate(MigrateArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// The interface to bind (defaults to 0.0.0.0).
    #[arg(long)]
    host: Option<IpAddr>,

    /// The port to listen on (defaults to 5555).
    #[arg(long)]
    port: Option<u16>,

    /// Path of the SQLite file. Overrides FILENAME.
    #[arg(long)]
    database: Option<PathBuf>,
}

#[derive(Parser)]
struct MigrateArgs {
    /// Path of the SQLite file. Overrides FILENAME.
    #[arg(long)]
    database: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(self, settings: &mut Settings) {
        if let Some(host) = self.host {
            settings.server.host = host;
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(database) = self.database {
            settings.database.filename = Some(database);
        }
    }
}

async fn handle_migrate(settings: &Settings) -> anyhow::Result<()> {
    let pool = database::connect(&settings.database).await?;
    database::run_migrations(&pool).await?;
    pool.close().await;
    tracing::info!("Database schema is up to date.");
    Ok(())
}
