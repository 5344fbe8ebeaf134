//! Per-request database session
//!
//! Handlers that touch the item store take a `DbSession` argument. The
//! connection is checked out of the pool when the extractor runs and goes
//! back when the session is dropped, which covers early returns, errors
//! and cancelled requests alike.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

use super::repos::DbError;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// One pooled connection, scoped to a single request
pub struct DbSession(PoolConnection<Sqlite>);

impl DbSession {
    /// Check a connection out of the pool.
    ///
    /// Handlers that read a body call this after validating it, since the
    /// body extractor has to run last.
    pub async fn acquire(state: &AppState) -> Result<Self, ApiError> {
        let conn = state.pool.acquire().await.map_err(DbError::from)?;
        tracing::trace!("Database session acquired");
        Ok(Self(conn))
    }
}

impl FromRequestParts<Arc<AppState>> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Self::acquire(state).await
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &SqliteConnection {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut SqliteConnection {
        &mut self.0
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::trace!("Database session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use axum::http::Request;
    use std::time::Duration;

    #[tokio::test]
    async fn session_returns_connection_on_drop() {
        let pool = create_memory_pool().await.unwrap();
        let state = Arc::new(AppState::new(pool.clone(), Default::default()));
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let session = DbSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(pool.num_idle(), 0);

        drop(session);

        // Single-connection pool: this only succeeds once the session is back
        let conn = tokio::time::timeout(Duration::from_secs(2), pool.acquire()).await;
        assert!(matches!(conn, Ok(Ok(_))));
    }
}
