use thiserror::Error;

use crate::types::DroneId;

#[derive(Error, Debug)]
pub enum SeabedError {
    #[error("Malformed protocol: {0}")]
    MalformedProtocol(String),

    /// Malformed radar label. Record-local form of a protocol error: only
    /// the blip carrying it is dropped.
    #[error("Unknown quadrant label: {0:?}")]
    UnknownQuadrant(String),

    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("No drone with id {0}")]
    UnknownDrone(DroneId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SeabedError {
    /// Errors that only invalidate a single record, not the whole turn.
    pub fn is_record_local(&self) -> bool {
        matches!(
            self,
            SeabedError::UnknownQuadrant(_) | SeabedError::UnknownDrone(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SeabedError>;
