#[cfg(test)]
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Empty in-memory database.
///
/// Every in-memory connection is its own database, so the pool is pinned to a
/// single connection that never expires.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool")
}

/// In-memory database with the pothole schema applied
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = memory_pool().await;
    crate::core::database::init_schema(&pool)
        .await
        .expect("schema init");
    pool
}
