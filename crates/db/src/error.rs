use railyard_core::error::CoreError;

/// Error returned by writes that validate before touching storage.
///
/// Storage errors are carried unmodified so callers can classify them
/// (unique and foreign-key violations in particular).
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
