//! Data-access capability used by the validation rules.
//!
//! Validators never query storage themselves. They receive the answers to a
//! handful of yes/no questions from an implementation of [`ScheduleLookup`],
//! which keeps the rules testable without a live database.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

/// Existence and uniqueness questions asked during validation.
///
/// `exclude_id` names the row being updated (if any). That row is ignored
/// so a record never conflicts with its own stored value.
#[async_trait]
pub trait ScheduleLookup: Send + Sync {
    /// Error raised by the underlying store. Validation failures are
    /// converted into it so callers see a single error type.
    type Error: From<CoreError> + Send;

    /// Whether another station already uses exactly this name.
    async fn station_name_taken(
        &self,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, Self::Error>;

    /// Whether any other platform, at any station, uses this number.
    async fn platform_num_taken(
        &self,
        platform_num: i32,
        exclude_id: Option<DbId>,
    ) -> Result<bool, Self::Error>;

    /// Whether a platform with this id exists.
    async fn platform_exists(&self, platform_id: DbId) -> Result<bool, Self::Error>;

    /// Whether any other assignment references this platform.
    async fn platform_occupied(
        &self,
        platform_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<bool, Self::Error>;
}
