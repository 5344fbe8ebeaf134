//! Schema setup for the item store

use sqlx::SqlitePool;

/// Create the `items` table if it does not exist.
///
/// AUTOINCREMENT keeps deleted ids from being handed out again.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running item store migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(30) NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
