//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual conversion work.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::Uri,
    Json,
};

use super::dto::{
    CanonicalRequest, CanonicalResponse, ConvertRequest, ConvertResponse, DisplayChoice, DisplayRequest,
    HealthResponse, ParseRequest, ParseResponse, UnitDto, UnitListResponse, UnitsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        default_preference: state.config.display.default_preference,
    }))
}

// =============================================================================
// Unit Registry
// =============================================================================

/// GET /v1/units?dimension=&system=
///
/// List registry units, optionally filtered.
pub async fn list_units(query: Result<Query<UnitsQuery>, QueryRejection>) -> HandlerResult<UnitListResponse> {
    let Query(query) = query?;
    let units: Vec<UnitDto> = services::list_units(query.dimension.as_deref(), query.system.as_deref())?
        .into_iter()
        .map(Into::into)
        .collect();
    let total = units.len();

    Ok(Json(UnitListResponse { units, total }))
}

/// GET /v1/units/{dimension}/canonical
///
/// The storage unit of a dimension.
pub async fn get_canonical_unit(Path(dimension): Path<String>) -> HandlerResult<UnitDto> {
    let unit = services::canonical_for(&dimension)?;
    Ok(Json(unit.into()))
}

// =============================================================================
// Conversion
// =============================================================================

/// POST /v1/convert
pub async fn convert(
    State(state): State<AppState>,
    request: Result<Json<ConvertRequest>, JsonRejection>,
) -> HandlerResult<ConvertResponse> {
    let Json(request) = request?;
    let converted = services::convert_amount(
        request.amount,
        &request.from,
        &request.to,
        request.precision,
        &state.config.display,
    )?;
    Ok(Json(converted.into()))
}

/// POST /v1/canonical
///
/// Normalize an amount to the unit records are stored in.
pub async fn to_canonical(request: Result<Json<CanonicalRequest>, JsonRejection>) -> HandlerResult<CanonicalResponse> {
    let Json(request) = request?;
    let canonical = services::canonicalize(request.amount, &request.unit)?;
    Ok(Json(canonical.into()))
}

/// POST /v1/display
///
/// Render a stored amount in the caller's preferred units.
pub async fn display(
    State(state): State<AppState>,
    request: Result<Json<DisplayRequest>, JsonRejection>,
) -> HandlerResult<DisplayChoice> {
    let Json(request) = request?;
    let choice = services::display_amount(
        request.amount,
        &request.dimension,
        request.preference.as_deref(),
        request.precision,
        &state.config.display,
    )?;
    Ok(Json(choice))
}

/// POST /v1/parse
///
/// Parse free text like `"2,5 l"` typed into a form field.
pub async fn parse(request: Result<Json<ParseRequest>, JsonRejection>) -> HandlerResult<ParseResponse> {
    let Json(request) = request?;
    let parsed = services::parse_amount(&request.text)?;
    Ok(Json(parsed.into()))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
