use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Slot unavailable: {0}")]
    SlotUnavailable(String),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("CSV storage error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification for callers mapping errors onto user-visible
/// responses. All storage failures collapse into `Persistence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SlotUnavailable,
    NotFound,
    Validation,
    Persistence,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::SlotUnavailable(_) => ErrorKind::SlotUnavailable,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Database(_) | AppError::Csv(_) | AppError::Io(_) => ErrorKind::Persistence,
        }
    }
}
