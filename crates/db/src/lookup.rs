//! PostgreSQL-backed [`ScheduleLookup`].

use async_trait::async_trait;
use railyard_core::lookup::ScheduleLookup;
use railyard_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::repositories::{AssignmentRepo, PlatformRepo, StationRepo};

/// Answers validation lookups with one `SELECT EXISTS` per question.
///
/// Each call is a fresh read with no locking; the `uq_*` constraints
/// catch anything that slips through between the check and the write.
#[derive(Clone, Copy)]
pub struct PgScheduleLookup<'a> {
    pool: &'a PgPool,
}

impl<'a> PgScheduleLookup<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<'a> ScheduleLookup for PgScheduleLookup<'a> {
    type Error = DbError;

    async fn station_name_taken(
        &self,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, DbError> {
        let taken = StationRepo::name_exists(self.pool, name, exclude_id).await?;
        tracing::debug!(name, ?exclude_id, taken, "Checked station name");
        Ok(taken)
    }

    async fn platform_num_taken(
        &self,
        platform_num: i32,
        exclude_id: Option<DbId>,
    ) -> Result<bool, DbError> {
        let taken = PlatformRepo::platform_num_exists(self.pool, platform_num, exclude_id).await?;
        tracing::debug!(platform_num, ?exclude_id, taken, "Checked platform number");
        Ok(taken)
    }

    async fn platform_exists(&self, platform_id: DbId) -> Result<bool, DbError> {
        Ok(PlatformRepo::exists(self.pool, platform_id).await?)
    }

    async fn platform_occupied(
        &self,
        platform_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<bool, DbError> {
        let occupied = AssignmentRepo::platform_in_use(self.pool, platform_id, exclude_id).await?;
        tracing::debug!(platform_id, ?exclude_id, occupied, "Checked platform vacancy");
        Ok(occupied)
    }
}
