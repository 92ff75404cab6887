//! Repository for the `platforms` table.

use railyard_core::types::DbId;
use railyard_core::validation::platform::NewPlatform;
use sqlx::PgPool;

use crate::models::platform::Platform;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, platform_num, station_id, created_at, updated_at";

/// Provides CRUD operations for platforms.
pub struct PlatformRepo;

impl PlatformRepo {
    /// Insert a new platform, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPlatform) -> Result<Platform, sqlx::Error> {
        let query = format!(
            "INSERT INTO platforms (platform_num, station_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(input.platform_num())
            .bind(input.station_id())
            .fetch_one(pool)
            .await
    }

    /// Find a platform by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms WHERE id = $1");
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all platforms ordered by number.
    pub async fn list(pool: &PgPool) -> Result<Vec<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms ORDER BY platform_num");
        sqlx::query_as::<_, Platform>(&query).fetch_all(pool).await
    }

    /// List the platforms belonging to one station, ordered by number.
    pub async fn list_by_station(
        pool: &PgPool,
        station_id: DbId,
    ) -> Result<Vec<Platform>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM platforms WHERE station_id = $1 ORDER BY platform_num"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(station_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a platform with a re-validated record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewPlatform,
    ) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!(
            "UPDATE platforms SET
                platform_num = $2,
                station_id = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .bind(input.platform_num())
            .bind(input.station_id())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a platform by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM platforms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a platform other than `exclude_id` uses this number, at any station.
    pub async fn platform_num_exists(
        pool: &PgPool,
        platform_num: i32,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM platforms
                WHERE platform_num = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(platform_num)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Whether a platform with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM platforms WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
