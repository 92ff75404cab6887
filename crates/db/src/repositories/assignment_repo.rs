//! Repository for the `assignments` table.

use railyard_core::types::DbId;
use railyard_core::validation::assignment::NewAssignment;
use sqlx::PgPool;

use crate::models::assignment::Assignment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, arrival_time, departure_time, train_id, platform_id, created_at, updated_at";

/// Provides CRUD operations for platform assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAssignment) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (arrival_time, departure_time, train_id, platform_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.arrival_time())
            .bind(input.departure_time())
            .bind(input.train_id())
            .bind(input.platform_id())
            .fetch_one(pool)
            .await
    }

    /// Find an assignment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assignments ordered by arrival time.
    pub async fn list(pool: &PgPool) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments ORDER BY arrival_time, id");
        sqlx::query_as::<_, Assignment>(&query).fetch_all(pool).await
    }

    /// Overwrite an assignment with a re-validated record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewAssignment,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!(
            "UPDATE assignments SET
                arrival_time = $2,
                departure_time = $3,
                train_id = $4,
                platform_id = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .bind(input.arrival_time())
            .bind(input.departure_time())
            .bind(input.train_id())
            .bind(input.platform_id())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an assignment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an assignment other than `exclude_id` references this platform.
    pub async fn platform_in_use(
        pool: &PgPool,
        platform_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM assignments
                WHERE platform_id = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(platform_id)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }
}
