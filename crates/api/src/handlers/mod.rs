//! HTTP handlers, one module per resource.
//!
//! Creates and updates follow the same shape: build the full record
//! (overlaying the stored row on update), run the `railyard_core`
//! check for it, then hand the validated record to the repository.

pub mod assignment;
pub mod platform;
pub mod station;
pub mod train;
