use crate::domains::landing::Boundaries;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{what} width and length must be at least 1, got {width}x{length}")]
    InvalidDimension {
        what: &'static str,
        width: i64,
        length: i64,
    },

    #[error("Platform {platform} is out of the landing area {landing_area}")]
    OutOfLandingArea {
        platform: Boundaries,
        landing_area: Boundaries,
    },

    #[error("Invalid event history: {reason}")]
    InvalidHistory { reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Event store error: {0}")]
    EventStore(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
