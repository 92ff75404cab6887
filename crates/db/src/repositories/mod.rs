//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes take the validated
//! `New*` records from `railyard_core::validation`.

pub mod assignment_repo;
pub mod platform_repo;
pub mod station_repo;
pub mod train_repo;

pub use assignment_repo::AssignmentRepo;
pub use platform_repo::PlatformRepo;
pub use station_repo::StationRepo;
pub use train_repo::TrainRepo;
