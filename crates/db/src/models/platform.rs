//! Platform entity model and DTOs.

use std::fmt;

use railyard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A platform row from the `platforms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Platform {
    pub id: DbId,
    pub platform_num: i32,
    pub station_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Platform {}>", self.platform_num)
    }
}

/// DTO for creating a new platform.
///
/// `platform_num` is kept as raw JSON so a non-integer value is reported
/// as a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlatform {
    pub platform_num: Option<serde_json::Value>,
    pub station_id: Option<DbId>,
}

/// DTO for updating an existing platform. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlatform {
    pub platform_num: Option<serde_json::Value>,
    pub station_id: Option<DbId>,
}
