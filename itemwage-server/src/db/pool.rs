//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://items.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// In-memory databases live and die with their connection, so they get
/// exactly one connection that is never recycled.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    if is_memory_url(database_url) {
        return SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options.journal_mode(SqliteJournalMode::Wal))
        .await
}

/// Create a fresh in-memory pool (tests, throwaway runs).
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options("sqlite::memory:", 1).await
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_memory_urls() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file:items?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite://items.db"));
    }

    #[tokio::test]
    async fn pool_acquires_connection() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn file_pool_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("items.db").display());

        let pool = create_pool(&url).await.expect("pool creation failed");
        assert!(pool.acquire().await.is_ok());
        assert!(dir.path().join("items.db").exists());
    }
}
