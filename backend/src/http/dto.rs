//! Data Transfer Objects for the HTTP API.
//!
//! Unit, dimension and preference fields in requests are plain strings so that
//! unknown values reach the service layer and come back as structured errors
//! instead of JSON rejections.

use serde::{Deserialize, Serialize};

use apiary_units::{registry, Dimension, MeasurementSystem, Unit, UnitPreference};

pub use apiary_units::DisplayChoice;

use crate::services::{CanonicalAmount, ConvertedAmount, ParsedAmount};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Preference applied when a request carries none
    pub default_preference: UnitPreference,
}

/// Query parameters for the unit listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UnitsQuery {
    /// Restrict to one dimension (`volume` or `weight`)
    #[serde(default)]
    pub dimension: Option<String>,
    /// Restrict to one system (`metric` or `imperial`)
    #[serde(default)]
    pub system: Option<String>,
}

/// One registry unit as shown to unit pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDto {
    pub symbol: String,
    pub name: String,
    pub dimension: Dimension,
    pub system: MeasurementSystem,
    pub factor_to_canonical: f64,
    pub canonical: bool,
}

impl From<Unit> for UnitDto {
    fn from(unit: Unit) -> Self {
        let meta = registry::meta(unit);
        Self {
            symbol: meta.symbol.to_string(),
            name: meta.name.to_string(),
            dimension: meta.dim,
            system: meta.system,
            factor_to_canonical: meta.factor_to_canonical,
            canonical: unit.is_canonical(),
        }
    }
}

/// Unit list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitListResponse {
    /// Units, grouped by dimension and ascending by magnitude
    pub units: Vec<UnitDto>,
    /// Total count
    pub total: usize,
}

/// Request body for `POST /v1/convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
    /// Decimals in the label (default: configured precision)
    #[serde(default)]
    pub precision: Option<usize>,
}

/// Response for `POST /v1/convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub amount: f64,
    pub unit: Unit,
    pub label: String,
}

impl From<ConvertedAmount> for ConvertResponse {
    fn from(converted: ConvertedAmount) -> Self {
        Self {
            amount: converted.quantity.amount(),
            unit: converted.quantity.unit(),
            label: converted.label,
        }
    }
}

/// Request body for `POST /v1/canonical`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalRequest {
    pub amount: f64,
    pub unit: String,
}

/// Response for `POST /v1/canonical`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalResponse {
    pub amount: f64,
    pub unit: Unit,
    pub dimension: Dimension,
}

impl From<CanonicalAmount> for CanonicalResponse {
    fn from(canonical: CanonicalAmount) -> Self {
        Self {
            amount: canonical.quantity.amount(),
            unit: canonical.quantity.unit(),
            dimension: canonical.dimension,
        }
    }
}

/// Request body for `POST /v1/display`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayRequest {
    /// Amount in the canonical unit of `dimension`
    pub amount: f64,
    pub dimension: String,
    /// `metric` or `imperial` (default: configured preference)
    #[serde(default)]
    pub preference: Option<String>,
    #[serde(default)]
    pub precision: Option<usize>,
}

/// Request body for `POST /v1/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// Response for `POST /v1/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub amount: f64,
    pub unit: Unit,
    pub canonical_amount: f64,
    pub canonical_unit: Unit,
    pub dimension: Dimension,
}

impl From<ParsedAmount> for ParseResponse {
    fn from(parsed: ParsedAmount) -> Self {
        Self {
            amount: parsed.parsed.amount(),
            unit: parsed.parsed.unit(),
            canonical_amount: parsed.canonical.amount(),
            canonical_unit: parsed.canonical.unit(),
            dimension: parsed.parsed.dimension(),
        }
    }
}
