//! Club Service - HTTP server for members, clubs and memberships.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use club_service_lib::config::ClubServiceConfig;
use club_service_lib::{MigrateAction, Storage};

#[derive(Parser)]
#[command(name = "club-service")]
#[command(about = "Member and club management service")]
struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "CLUB_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "CLUB_SERVICE_PORT", default_value = "3000")]
        port: u16,
        /// Keep data in memory instead of Postgres
        #[arg(long)]
        in_memory: bool,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClubServiceConfig::from_env();

    // Initialize tracing
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.service.log_level.clone().into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            in_memory,
        } => {
            let storage = if in_memory {
                Storage::InMemory
            } else {
                Storage::Postgres
            };
            club_service_lib::run_server(&host, port, storage).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            club_service_lib::run_migrations(migrate_action).await?;
        }
    }

    Ok(())
}
