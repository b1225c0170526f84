//! Property repository implementation.

use sqlx::PgPool;

use estatehub_core::error::{AppError, ErrorKind};
use estatehub_core::result::AppResult;
use estatehub_core::types::PropertyId;
use estatehub_entity::property::{CreateProperty, Property};

/// Repository for property CRUD operations.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a property by primary key.
    pub async fn find_by_id(&self, id: PropertyId) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find property", e))
    }

    /// List every property ordered by name.
    pub async fn list_by_name(&self) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list properties", e))
    }

    /// Insert a new property.
    pub async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "INSERT INTO properties (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("properties_name_length") =>
            {
                AppError::validation("Name must be 2 to 100 characters")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create property", e),
        })
    }

    /// Delete a property and all of its photo records in one transaction.
    ///
    /// Returns `false` when no property had the given id.
    pub async fn delete(&self, id: PropertyId) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM photos WHERE property_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete property photos", e)
            })?;

        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete property", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit property delete", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
