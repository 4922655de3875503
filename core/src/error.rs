use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid game speed: {speed} (must be finite and > 0)")]
    InvalidSpeed { speed: f64 },

    #[error("Unknown activity '{id}'")]
    UnknownActivity { id: String },

    #[error("Unknown room '{id}'")]
    UnknownRoom { id: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
