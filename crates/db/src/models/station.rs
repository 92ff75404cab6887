//! Station entity model and DTOs.

use std::fmt;

use railyard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A station row from the `stations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    pub id: DbId,
    pub name: String,
    pub city: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Station {}>", self.name)
    }
}

/// DTO for creating a new station.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateStation {
    pub name: Option<String>,
    pub city: Option<String>,
}

/// DTO for updating an existing station. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStation {
    pub name: Option<String>,
    pub city: Option<String>,
}
