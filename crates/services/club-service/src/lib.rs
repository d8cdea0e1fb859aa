//! Club Service Library
//!
//! This crate provides member, club and membership management over HTTP.
//! It can be backed by Postgres or by an in-memory store.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use crate::infra::MigrateAction;

use std::net::SocketAddr;

use tracing::info;

use crate::config::ClubServiceConfig;
use crate::infra::Database;
use crate::routes::create_router;
use crate::state::AppState;

/// Storage backend selected at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    InMemory,
}

/// Run the HTTP server on the given address.
pub async fn run_server(
    host: &str,
    port: u16,
    storage: Storage,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ClubServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;

    let state = match storage {
        Storage::Postgres => {
            info!(database = ?config.database, "Connecting to database");
            AppState::from_database(Database::connect_and_migrate(&config.database).await?)
        }
        Storage::InMemory => {
            info!("Using in-memory storage; data is lost on shutdown");
            AppState::in_memory()
        }
    };

    let app = create_router(state);

    let addr: SocketAddr = config.service.addr().parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClubServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;

    if action == MigrateAction::Status {
        for state in db.migration_states().await? {
            let marker = if state.applied { "[x]" } else { "[ ]" };
            println!("{} {}", marker, state.name);
        }
        return Ok(());
    }

    db.migrate(action).await?;
    info!(?action, "Migration finished");
    Ok(())
}
