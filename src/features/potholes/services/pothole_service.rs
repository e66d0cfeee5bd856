use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::potholes::models::{CreatePothole, Pothole, PotholeStatus};

const POTHOLE_COLUMNS: &str = "id, COALESCE(street, '') AS street, neighborhood, severity, \
                               latitude, longitude, status, completion_date";

/// Service for pothole storage operations
///
/// Every statement runs in autocommit mode, so a mutation is durable by the
/// time the call returns.
pub struct PotholeService {
    pool: SqlitePool,
}

impl PotholeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new pothole as pending
    pub async fn create(&self, data: &CreatePothole) -> Result<Pothole> {
        let sql = format!(
            r#"
            INSERT INTO potholes (street, severity, latitude, longitude, status)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {POTHOLE_COLUMNS}
            "#
        );
        let pothole = sqlx::query_as::<_, Pothole>(&sql)
            .bind(&data.street)
            .bind(data.severity)
            .bind(data.location.latitude)
            .bind(data.location.longitude)
            .bind(PotholeStatus::Pending)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create pothole: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Created pothole: id={}, severity={}, at ({}, {})",
            pothole.id,
            pothole.severity,
            pothole.latitude,
            pothole.longitude
        );

        Ok(pothole)
    }

    /// Get pothole by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Pothole> {
        let sql = format!("SELECT {POTHOLE_COLUMNS} FROM potholes WHERE id = ?");
        sqlx::query_as::<_, Pothole>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get pothole: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Pothole {} not found", id)))
    }

    /// List potholes with the given status in insertion order
    pub async fn list_by_status(&self, status: PotholeStatus) -> Result<Vec<Pothole>> {
        let sql = format!("SELECT {POTHOLE_COLUMNS} FROM potholes WHERE status = ? ORDER BY id");
        sqlx::query_as::<_, Pothole>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list potholes by status: {:?}", e);
                AppError::Database(e)
            })
    }

    /// List potholes resolved on exactly `date`
    pub async fn list_resolved_on(&self, date: NaiveDate) -> Result<Vec<Pothole>> {
        let sql = format!(
            "SELECT {POTHOLE_COLUMNS} FROM potholes \
             WHERE status = ? AND completion_date = ? ORDER BY id"
        );
        sqlx::query_as::<_, Pothole>(&sql)
            .bind(PotholeStatus::Resolved)
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list potholes resolved on {}: {:?}", date, e);
                AppError::Database(e)
            })
    }

    /// Resolve every pending pothole, stamping `today` as completion date.
    ///
    /// A single set-based UPDATE, so either all pending rows move or none do.
    /// Returns the number of potholes resolved.
    pub async fn resolve_all_pending(&self, today: NaiveDate) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE potholes SET status = ?, completion_date = ? WHERE status = ?",
        )
        .bind(PotholeStatus::Resolved)
        .bind(today)
        .bind(PotholeStatus::Pending)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve pending potholes: {:?}", e);
            AppError::Database(e)
        })?;

        let resolved = result.rows_affected();
        tracing::info!("Resolved {} pending potholes on {}", resolved, today);
        Ok(resolved)
    }

    /// Delete a pothole. Returns `false` when no such id exists.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM potholes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete pothole: {:?}", e);
                AppError::Database(e)
            })?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("Deleted pothole: {}", id);
        } else {
            tracing::debug!("Delete of missing pothole {} ignored", id);
        }
        Ok(deleted)
    }
}
