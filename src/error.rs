use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown diet type: {0}")]
    UnknownDietType(String),

    #[error("No profile saved yet. Run 'profile' first.")]
    MissingProfile,

    #[error("Page {page} is out of range (1..={total})")]
    PageOutOfRange { page: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
