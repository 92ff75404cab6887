//! Train entity model and DTOs.

use std::fmt;

use railyard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A train row from the `trains` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Train {
    pub id: DbId,
    pub train_num: Option<String>,
    pub service_type: String,
    pub origin: String,
    pub destination: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Train {}>", self.train_num.as_deref().unwrap_or("?"))
    }
}

/// DTO for creating a new train.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrain {
    pub train_num: Option<String>,
    pub service_type: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// DTO for updating an existing train. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrain {
    pub train_num: Option<String>,
    pub service_type: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}
