//! Item repository
//!
//! Works on a single borrowed connection (the request's session):
//! - create: INSERT ... RETURNING
//! - update: COALESCE so omitted fields keep their value
//! - delete: DELETE ... RETURNING the row as it was
//!
//! Mutations run in a transaction committed before returning.

use sqlx::{Connection, FromRow, SqliteConnection};

use super::DbError;
use crate::models::{ItemPatch, NewItem};

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Item repository
pub struct ItemRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ItemRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a new item; the store assigns the id.
    pub async fn create(&mut self, item: &NewItem) -> Result<Item, DbError> {
        let mut tx = self.conn.begin().await?;

        let created: Item = sqlx::query_as(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(item.name.as_str())
        .bind(item.description.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(item_id = created.id, "Created item");
        Ok(created)
    }

    /// Get a single item by id.
    pub async fn get(&mut self, id: i64) -> Result<Item, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, description
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Overwrite the supplied fields, leaving the rest untouched.
    pub async fn update(&mut self, id: i64, patch: &ItemPatch) -> Result<Item, DbError> {
        let mut tx = self.conn.begin().await?;

        let updated: Option<Item> = sqlx::query_as(
            r#"
            UPDATE items
            SET name = COALESCE($1, name),
                description = COALESCE($2, description)
            WHERE id = $3
            RETURNING id, name, description
            "#,
        )
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let updated = updated.ok_or_else(|| not_found(id))?;
        tx.commit().await?;

        tracing::debug!(item_id = id, "Updated item");
        Ok(updated)
    }

    /// Remove an item, returning its last state.
    pub async fn delete(&mut self, id: i64) -> Result<Item, DbError> {
        let mut tx = self.conn.begin().await?;

        let deleted: Option<Item> = sqlx::query_as(
            r#"
            DELETE FROM items
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let deleted = deleted.ok_or_else(|| not_found(id))?;
        tx.commit().await?;

        tracing::debug!(item_id = id, "Deleted item");
        Ok(deleted)
    }
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: "Item",
        id: id.to_string(),
    }
}
