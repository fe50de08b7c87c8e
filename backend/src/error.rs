//! Error types for the conversion service.

use apiary_units::ConversionError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Missing or malformed configuration (file, TOML or environment).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request was well-formed JSON but asked for something unsupported.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Conversion core rejected the input.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl ServiceError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invalid-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Stable, machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::InvalidRequest(_) => "BAD_REQUEST",
            Self::Conversion(e) => e.code(),
        }
    }

    /// True when the caller sent bad input, false for server-side faults.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::Conversion(_))
    }
}
