//! Postgres pool and schema management.

use std::time::Duration;

use common::DatabaseConfig;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use super::migrations::Migrator;

/// Schema change requested from the `migrate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Name and applied flag of one known migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Shared Postgres connection pool
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool without touching the schema.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        Ok(Self {
            connection: SeaDatabase::connect(options).await?,
        })
    }

    /// Open the pool and bring the schema up to date (used by `serve`).
    pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect(config).await?;
        db.migrate(MigrateAction::Up).await?;
        tracing::info!("Database connected and schema is current");
        Ok(db)
    }

    /// Pool handle for the SeaORM stores
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply a schema change. `Status` reads only; use [`Self::migration_states`].
    pub async fn migrate(&self, action: MigrateAction) -> Result<(), DbErr> {
        match action {
            MigrateAction::Up => Migrator::up(&self.connection, None).await,
            MigrateAction::Down => Migrator::down(&self.connection, Some(1)).await,
            MigrateAction::Fresh => Migrator::fresh(&self.connection).await,
            MigrateAction::Status => Ok(()),
        }
    }

    /// Every known migration in apply order, with whether it has run.
    pub async fn migration_states(&self) -> Result<Vec<MigrationState>, DbErr> {
        let migrations = Migrator::get_migration_with_status(&self.connection).await?;

        Ok(migrations
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: m.status() == MigrationStatus::Applied,
            })
            .collect())
    }

    /// Round-trip a trivial query (health check).
    pub async fn ping(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        self.connection
            .execute(Statement::from_string(backend, "SELECT 1"))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
impl Database {
    fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_status_action_issues_no_statements() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let db = Database::from_connection(conn.clone());

        db.migrate(MigrateAction::Status).await.unwrap();

        assert!(conn.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_ping_runs_select_one() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let db = Database::from_connection(conn.clone());

        db.ping().await.unwrap();

        let log = conn.into_transaction_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].statements()[0].sql, "SELECT 1");
    }

    #[tokio::test]
    async fn test_ping_reports_failure() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let db = Database::from_connection(conn);

        assert!(db.ping().await.is_err());
    }
}
