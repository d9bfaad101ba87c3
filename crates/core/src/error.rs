use thiserror::Error;

pub type ZoneCastResult<T> = Result<T, ZoneCastError>;

#[derive(Error, Debug)]
pub enum ZoneCastError {
    #[error("UTC offset {offset} is outside [-12, +14] or not a half-hour multiple")]
    InvalidOffset { offset: f64 },

    #[error("Activity window {start}..={end} has hours outside 0..=23")]
    InvalidWindow { start: u8, end: u8 },

    #[error("Region '{id}' is already selected")]
    DuplicateRegion { id: String },

    #[error("Unknown platform profile: {key}")]
    UnknownPlatform { key: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
