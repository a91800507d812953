pub mod groups;
pub mod migrations;
pub mod tenants;

use crate::config::DatabaseConfig;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AsyncDbConnection {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl AsyncDbConnection {
    pub fn new(pool: Pool<SqliteConnectionManager>) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub async fn lock(&self) -> anyhow::Result<PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| anyhow::anyhow!("Failed to get DB connection from pool: {}", e))
    }
}

pub struct Database {
    pub async_connection: AsyncDbConnection,
}

impl Database {
    /// Open (or create) the database file and run migrations
    pub fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let db_path = config.resolved_path()?;

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Migrate on a plain connection before the pool opens its own
        {
            let conn = Connection::open(&db_path)?;
            migrations::run_migrations(&conn)?;
        }

        let busy_timeout = Duration::from_secs(config.busy_timeout_secs);
        let manager = SqliteConnectionManager::file(&db_path).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            Ok(())
        });

        let pool = Pool::builder().max_size(config.pool_size).build(manager)?;

        tracing::info!("Database ready at {}", db_path.display());

        Ok(Self {
            async_connection: AsyncDbConnection::new(pool),
        })
    }

    /// Single-connection in-memory database, migrated and ready
    pub fn in_memory() -> anyhow::Result<Self> {
        let manager = SqliteConnectionManager::memory().with_init(|conn| {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            migrations::run_migrations(conn)
        });

        // Every new in-memory connection is a new database, so keep exactly one
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)?;

        Ok(Self {
            async_connection: AsyncDbConnection::new(pool),
        })
    }

    pub fn connection(&self) -> AsyncDbConnection {
        self.async_connection.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_database_is_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: Some(dir.path().join("nested").join("roster.sqlite")),
            pool_size: 2,
            busy_timeout_secs: 1,
        };

        let db = Database::new(&config).unwrap();
        let conn = db.connection().lock().await.unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(tables, vec!["party_groups", "party_members", "tenants"]);
        assert!(dir.path().join("nested").exists());
    }

    #[tokio::test]
    async fn test_in_memory_database_enforces_foreign_keys() {
        let db = Database::in_memory().unwrap();
        let conn = db.connection().lock().await.unwrap();

        let result = conn.execute(
            "INSERT INTO party_members (group_id, name, kind, admin_entered, created_at)
             VALUES (999, 'Orphan', 'adult', true, 0)",
            [],
        );
        assert!(result.is_err());
    }
}
