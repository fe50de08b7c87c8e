//! Conversion, display and parsing services.

use apiary_units::{
    canonical_unit, format_for_preference_with_precision, lookup, parse_quantity, registry, Dimension,
    DisplayChoice, MeasurementSystem, Quantity, Unit, UnitPreference,
};

use crate::config::{DisplaySettings, MAX_PRECISION};
use crate::error::{ServiceError, ServiceResult};

/// A converted amount with its formatted label.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedAmount {
    pub quantity: Quantity,
    pub label: String,
}

/// An amount normalized to its dimension's storage unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalAmount {
    pub quantity: Quantity,
    pub dimension: Dimension,
}

/// Parsed user text together with its canonical form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedAmount {
    pub parsed: Quantity,
    pub canonical: Quantity,
}

/// Registry units, optionally filtered by dimension and/or system.
pub fn list_units(dimension: Option<&str>, system: Option<&str>) -> ServiceResult<Vec<Unit>> {
    let dimension = dimension.map(str::parse::<Dimension>).transpose()?;
    let system = system.map(str::parse::<MeasurementSystem>).transpose()?;

    let units = match dimension {
        Some(dim) => registry::units_for(dim),
        None => registry::all_units(),
    };
    Ok(units
        .iter()
        .copied()
        .filter(|unit| system.is_none_or(|s| unit.system() == s))
        .collect())
}

/// Canonical (storage) unit of a dimension given by name.
pub fn canonical_for(dimension: &str) -> ServiceResult<Unit> {
    Ok(canonical_unit(dimension.parse()?))
}

/// Picks the requested precision or the configured default, capped at [`MAX_PRECISION`].
pub fn resolve_precision(requested: Option<usize>, settings: &DisplaySettings) -> ServiceResult<usize> {
    let precision = requested.unwrap_or(settings.precision);
    if precision > MAX_PRECISION {
        return Err(ServiceError::invalid_request(format!(
            "precision must be at most {}, got {}",
            MAX_PRECISION, precision
        )));
    }
    Ok(precision)
}

/// Converts `amount` from one unit symbol to another.
pub fn convert_amount(
    amount: f64,
    from: &str,
    to: &str,
    precision: Option<usize>,
    settings: &DisplaySettings,
) -> ServiceResult<ConvertedAmount> {
    let precision = resolve_precision(precision, settings)?;
    let from = lookup(from)?;
    let to = lookup(to)?;
    let quantity = Quantity::new(amount, from)?.to(to)?;
    log::debug!("Converted {} {} to {}", amount, from, quantity);
    Ok(ConvertedAmount {
        label: quantity.label(precision),
        quantity,
    })
}

/// Normalizes `amount` in `unit` to the canonical unit, as stored on records.
pub fn canonicalize(amount: f64, unit: &str) -> ServiceResult<CanonicalAmount> {
    let quantity = Quantity::new(amount, lookup(unit)?)?.to_canonical();
    Ok(CanonicalAmount {
        dimension: quantity.dimension(),
        quantity,
    })
}

/// Renders a canonical amount for a preference, falling back to configured defaults.
pub fn display_amount(
    canonical_amount: f64,
    dimension: &str,
    preference: Option<&str>,
    precision: Option<usize>,
    settings: &DisplaySettings,
) -> ServiceResult<DisplayChoice> {
    let dimension: Dimension = dimension.parse()?;
    let preference = match preference {
        Some(text) => text.parse::<UnitPreference>()?,
        None => settings.default_preference,
    };
    let precision = resolve_precision(precision, settings)?;

    let choice = format_for_preference_with_precision(canonical_amount, dimension, preference, precision)?;
    log::debug!(
        "Display {} {} for {} preference as {}",
        canonical_amount,
        canonical_unit(dimension),
        preference,
        choice.unit
    );
    Ok(choice)
}

/// Parses free text such as `"2,5 l"` and normalizes it.
pub fn parse_amount(text: &str) -> ServiceResult<ParsedAmount> {
    let parsed = parse_quantity(text)?;
    Ok(ParsedAmount {
        parsed,
        canonical: parsed.to_canonical(),
    })
}
