//! Repository for the `trains` table.

use railyard_core::types::DbId;
use railyard_core::validation::train::NewTrain;
use sqlx::PgPool;

use crate::models::train::Train;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, train_num, service_type, origin, destination, created_at, updated_at";

/// Provides CRUD operations for trains.
pub struct TrainRepo;

impl TrainRepo {
    /// Insert a new train, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTrain) -> Result<Train, sqlx::Error> {
        let query = format!(
            "INSERT INTO trains (train_num, service_type, origin, destination)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Train>(&query)
            .bind(input.train_num())
            .bind(input.service_type().as_str())
            .bind(input.origin())
            .bind(input.destination())
            .fetch_one(pool)
            .await
    }

    /// Find a train by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Train>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trains WHERE id = $1");
        sqlx::query_as::<_, Train>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all trains, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Train>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trains ORDER BY id");
        sqlx::query_as::<_, Train>(&query).fetch_all(pool).await
    }

    /// Overwrite a train with a re-validated record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewTrain,
    ) -> Result<Option<Train>, sqlx::Error> {
        let query = format!(
            "UPDATE trains SET
                train_num = $2,
                service_type = $3,
                origin = $4,
                destination = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Train>(&query)
            .bind(id)
            .bind(input.train_num())
            .bind(input.service_type().as_str())
            .bind(input.origin())
            .bind(input.destination())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a train by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trains WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
