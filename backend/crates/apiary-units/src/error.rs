//! Error types for unit lookup and conversion.

use crate::dimension::Dimension;

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Caller errors raised by the registry, converter and parser.
///
/// None of these are transient: retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Text did not name any registered unit.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Text did not name a dimension.
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// Text did not name a preference or measurement system.
    #[error("Unknown unit preference: {0}")]
    UnknownPreference(String),

    /// Source and target units measure different dimensions.
    #[error("Cannot convert between {from} and {to}")]
    DimensionMismatch {
        /// Dimension of the source unit.
        from: Dimension,
        /// Dimension of the target unit.
        to: Dimension,
    },

    /// Amount was negative, NaN, infinite, or overflows the canonical unit.
    #[error("Invalid quantity: {0} (amounts must be non-negative and finite in every unit)")]
    InvalidQuantity(f64),

    /// Text had no leading number or no unit.
    #[error("Could not parse an amount and unit from '{0}'")]
    Unparseable(String),
}

impl ConversionError {
    /// Stable machine-readable code for API clients.
    pub const fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit(_) => "UNKNOWN_UNIT",
            ConversionError::UnknownDimension(_) => "UNKNOWN_DIMENSION",
            ConversionError::UnknownPreference(_) => "UNKNOWN_PREFERENCE",
            ConversionError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            ConversionError::InvalidQuantity(_) => "INVALID_QUANTITY",
            ConversionError::Unparseable(_) => "UNPARSEABLE",
        }
    }
}
