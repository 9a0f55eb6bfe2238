use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("engine configuration error: {0}")]
    Config(String),

    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fix subscription closed; the consumer has gone away")]
    Disconnected,
}

pub type PipelineResult<T> = Result<T, PipelineError>;
