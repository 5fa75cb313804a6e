//! Fare Error Types
//!
//! Fare-specific error variants that integrate with `kernel::error::AppError`.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type FareResult<T> = Result<T, FareError>;

#[derive(Debug, Error)]
pub enum FareError {
    /// Routing lookup failed
    #[error("Route lookup failed: {0}")]
    RouteLookup(String),

    /// Rate schedule could not be read
    #[error("Rate schedule unavailable: {0}")]
    RateSource(String),

    /// Rate schedule was read but is not valid JSON for a schedule
    #[error("Invalid rate schedule: {0}")]
    InvalidRates(#[from] serde_json::Error),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FareError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FareError::RouteLookup(_) | FareError::RateSource(_) => ErrorKind::ExternalFailure,
            FareError::InvalidRates(_) | FareError::InvalidConfig(_) => ErrorKind::InvalidInput,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            FareError::RouteLookup(msg) => {
                tracing::warn!(message = %msg, "Route lookup failed");
            }
            FareError::RateSource(msg) => {
                tracing::error!(message = %msg, "Rate schedule unavailable");
            }
            FareError::InvalidRates(e) => {
                tracing::error!(error = %e, "Rate schedule is malformed");
            }
            FareError::InvalidConfig(msg) => {
                tracing::error!(message = %msg, "Invalid fare configuration");
            }
        }
    }
}

impl From<FareError> for AppError {
    fn from(err: FareError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}
