use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointsError {
    #[error("I/O error reading points: {0}")]
    Io(#[from] std::io::Error),

    #[error("points JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("points CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("points source unavailable: {0}")]
    Unavailable(String),
}

pub type PointsResult<T> = Result<T, PointsError>;
