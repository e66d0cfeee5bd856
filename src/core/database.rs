use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::core::config::DatabaseConfig;

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Full)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// Create the `potholes` table and bring older layouts up to date.
///
/// Safe to run on every startup: the table is only created when missing and
/// `completion_date` is only added to tables that predate it.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS potholes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            street TEXT NOT NULL DEFAULT '',
            neighborhood TEXT,
            severity TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            completion_date TEXT,
            CHECK ((status = 'pending') = (completion_date IS NULL))
        )
        "#,
    )
    .execute(pool)
    .await?;

    let has_completion_date: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pragma_table_info('potholes') WHERE name = 'completion_date'",
    )
    .fetch_one(pool)
    .await?;

    if has_completion_date == 0 {
        tracing::info!("Adding completion_date column to potholes table");
        sqlx::query("ALTER TABLE potholes ADD COLUMN completion_date TEXT")
            .execute(pool)
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::memory_pool;

    async fn column_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar("SELECT name FROM pragma_table_info('potholes') ORDER BY cid")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = memory_pool().await;

        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        assert_eq!(
            column_names(&pool).await,
            vec![
                "id",
                "street",
                "neighborhood",
                "severity",
                "latitude",
                "longitude",
                "status",
                "completion_date"
            ]
        );
    }

    #[tokio::test]
    async fn test_init_schema_upgrades_legacy_table() {
        let pool = memory_pool().await;
        sqlx::query(
            r#"
            CREATE TABLE potholes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                street TEXT, neighborhood TEXT, severity TEXT,
                latitude REAL, longitude REAL, status TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        init_schema(&pool).await.unwrap();

        let columns = column_names(&pool).await;
        assert_eq!(columns.last().map(String::as_str), Some("completion_date"));
        assert_eq!(columns.len(), 8);
    }

    #[tokio::test]
    async fn test_schema_rejects_resolved_without_date() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO potholes (street, severity, latitude, longitude, status) \
             VALUES ('Rua 1', 'low', -15.3, -49.6, 'resolved')",
        )
        .execute(&pool)
        .await;

        assert!(result.is_err());
    }
}
