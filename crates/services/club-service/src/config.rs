//! Club service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Default HTTP port for the club service
pub const DEFAULT_PORT: u16 = 3000;

/// Club service configuration.
#[derive(Debug, Clone)]
pub struct ClubServiceConfig {
    /// HTTP bind address and logging defaults
    pub service: ServiceConfig,
    /// Postgres connection settings
    pub database: DatabaseConfig,
}

impl ClubServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: env::var("CLUB_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: env::var("CLUB_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
                log_level: env::var("RUST_LOG").unwrap_or(defaults.service.log_level),
            },
            database: DatabaseConfig {
                url: env::var("CLUB_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
        }
    }
}

impl Default for ClubServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "club-service".to_string(),
                port: DEFAULT_PORT,
                log_level: "info,tower_http=debug".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}
