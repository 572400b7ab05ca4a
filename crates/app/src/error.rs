use simcore::{ConfigError, SimError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("tick {tick}: {source}")]
    Tick { tick: usize, source: SimError },
}
