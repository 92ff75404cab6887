//! Domain types and validation rules for the railyard schedule.
//!
//! Nothing in this crate touches the database. Existence and uniqueness
//! checks are expressed through [`lookup::ScheduleLookup`], which the `db`
//! crate implements against PostgreSQL.

pub mod error;
pub mod lookup;
pub mod service_type;
pub mod types;
pub mod validation;
