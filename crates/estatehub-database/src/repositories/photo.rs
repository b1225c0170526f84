//! Photo repository implementation.

use sqlx::PgPool;

use estatehub_core::error::{AppError, ErrorKind};
use estatehub_core::result::AppResult;
use estatehub_core::types::{PhotoId, PropertyId};
use estatehub_entity::photo::{NewPhoto, Photo};

/// Repository for photo CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    /// Create a new photo repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a photo by owning property and exact filename.
    pub async fn find_by_property_and_filename(
        &self,
        property_id: PropertyId,
        filename: &str,
    ) -> AppResult<Option<Photo>> {
        sqlx::query_as::<_, Photo>(
            "SELECT * FROM photos WHERE property_id = $1 AND filename = $2",
        )
        .bind(property_id)
        .bind(filename)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find photo", e))
    }

    /// List a property's photos in position order.
    pub async fn list_by_property(&self, property_id: PropertyId) -> AppResult<Vec<Photo>> {
        sqlx::query_as::<_, Photo>(
            "SELECT * FROM photos WHERE property_id = $1 ORDER BY position ASC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list photos", e))
    }

    /// List photos for several properties, grouped by property then position.
    pub async fn list_for_properties(&self, property_ids: &[PropertyId]) -> AppResult<Vec<Photo>> {
        let ids: Vec<i64> = property_ids.iter().map(|id| id.value()).collect();
        sqlx::query_as::<_, Photo>(
            "SELECT * FROM photos WHERE property_id = ANY($1) \
             ORDER BY property_id ASC, position ASC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list photos", e))
    }

    /// Highest committed position for a property, if it has photos.
    pub async fn max_position(&self, property_id: PropertyId) -> AppResult<Option<i32>> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(position) FROM photos WHERE property_id = $1",
        )
        .bind(property_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read max position", e))
    }

    /// Insert a photo row.
    ///
    /// A taken position is reported as `Conflict` so the caller can retry; a
    /// taken filename is a `Validation` error and a missing property is
    /// `NotFound`.
    pub async fn create(&self, data: &NewPhoto) -> AppResult<Photo> {
        sqlx::query_as::<_, Photo>(
            "INSERT INTO photos (property_id, filename, position, content_type, file_size) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.property_id)
        .bind(&data.filename)
        .bind(data.position)
        .bind(&data.content_type)
        .bind(data.file_size)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let violation = match &e {
                sqlx::Error::Database(db_err) => {
                    insert_violation(db_err.constraint(), db_err.is_check_violation(), data)
                }
                _ => None,
            };
            violation.unwrap_or_else(|| {
                AppError::with_source(ErrorKind::Database, "Failed to create photo", e)
            })
        })
    }

    /// Delete a photo by id. Returns `false` when nothing was deleted.
    pub async fn delete(&self, id: PhotoId) -> AppResult<bool> {
        sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected() > 0)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete photo", e))
    }
}

/// Map a constraint violation raised by a photo insert to a domain error.
///
/// Returns `None` for violations that are not part of the photo contract.
fn insert_violation(constraint: Option<&str>, is_check: bool, data: &NewPhoto) -> Option<AppError> {
    match constraint {
        Some("photos_property_position_key") => Some(AppError::conflict(format!(
            "Position {} has already been taken",
            data.position
        ))),
        Some("photos_property_filename_key") => Some(AppError::validation(format!(
            "Filename '{}' has already been taken",
            data.filename
        ))),
        Some("photos_property_id_fkey") => Some(AppError::not_found(format!(
            "Property {} not found",
            data.property_id
        ))),
        _ if is_check => Some(AppError::validation(format!(
            "Photo '{}' is invalid",
            data.filename
        ))),
        _ => None,
    }
}
