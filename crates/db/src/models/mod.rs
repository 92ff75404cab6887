//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Create DTO fields are `Option` too: a missing field must reach the
//! validation rules so they can report it, rather than failing inside serde.

pub mod assignment;
pub mod platform;
pub mod station;
pub mod train;
