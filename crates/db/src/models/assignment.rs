//! Platform assignment entity model and DTOs.

use std::fmt;

use railyard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An assignment row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub arrival_time: Timestamp,
    pub departure_time: Timestamp,
    pub train_id: Option<DbId>,
    pub platform_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.train_id {
            Some(train_id) => write!(
                f,
                "<Assignment Train No: {train_id} Platform: {}>",
                self.platform_id
            ),
            None => write!(f, "<Assignment Train No: - Platform: {}>", self.platform_id),
        }
    }
}

/// DTO for creating a new assignment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAssignment {
    pub arrival_time: Option<Timestamp>,
    pub departure_time: Option<Timestamp>,
    pub train_id: Option<DbId>,
    pub platform_id: Option<DbId>,
}

/// DTO for updating an existing assignment. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAssignment {
    pub arrival_time: Option<Timestamp>,
    pub departure_time: Option<Timestamp>,
    pub train_id: Option<DbId>,
    pub platform_id: Option<DbId>,
}
