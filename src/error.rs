//! Error types for the `SnowTrip` application
//!
//! Flight API failures never surface here; they degrade to fallback flights
//! tagged with a `FallbackReason`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnowTripError {
    /// Invalid or inconsistent configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Form input that cannot be planned
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl SnowTripError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
