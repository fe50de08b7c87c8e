//! Static unit registry.
//!
//! Maps each [`Dimension`] to its ordered unit table and canonical unit, and
//! resolves user-typed symbols to [`Unit`] values.
//!
//! # Conversion Formula
//!
//! Conversions go through the canonical unit of the dimension:
//! ```text
//! v_canonical = v_src * src.factor_to_canonical
//! v_dst = v_canonical / dst.factor_to_canonical
//! ```
//!
//! The tables are `static` and read-only, so they can be shared across threads
//! without synchronization.

use crate::dimension::{Dimension, MeasurementSystem};
use crate::error::{ConversionError, ConversionResult};
use crate::unit::Unit;

/// Volume units, ascending by magnitude.
static VOLUME_UNITS: [Unit; 4] = [Unit::Milliliter, Unit::FluidOunce, Unit::Liter, Unit::Gallon];

/// Weight units, ascending by magnitude.
static WEIGHT_UNITS: [Unit; 4] = [Unit::Gram, Unit::Ounce, Unit::Pound, Unit::Kilogram];

static ALL_UNITS: [Unit; 8] = [
    Unit::Milliliter,
    Unit::FluidOunce,
    Unit::Liter,
    Unit::Gallon,
    Unit::Gram,
    Unit::Ounce,
    Unit::Pound,
    Unit::Kilogram,
];

/// Metadata about a unit, as exposed to API clients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitMeta {
    /// The unit itself.
    pub unit: Unit,
    /// The dimension this unit belongs to.
    pub dim: Dimension,
    /// Unit family.
    pub system: MeasurementSystem,
    /// Scaling factor to the canonical unit of `dim`.
    pub factor_to_canonical: f64,
    /// Printable symbol.
    pub symbol: &'static str,
    /// Human-readable name of the unit.
    pub name: &'static str,
}

/// Returns metadata for the given unit.
#[inline]
pub fn meta(unit: Unit) -> UnitMeta {
    UnitMeta {
        unit,
        dim: unit.dimension(),
        system: unit.system(),
        factor_to_canonical: unit.factor_to_canonical(),
        symbol: unit.symbol(),
        name: unit.name(),
    }
}

/// Units of a dimension, ordered ascending by magnitude.
///
/// ```rust
/// use apiary_units::{registry, Dimension, Unit};
///
/// let units = registry::units_for(Dimension::Volume);
/// assert_eq!(units.first(), Some(&Unit::Milliliter));
/// ```
pub fn units_for(dimension: Dimension) -> &'static [Unit] {
    match dimension {
        Dimension::Volume => &VOLUME_UNITS,
        Dimension::Weight => &WEIGHT_UNITS,
    }
}

/// Units of a dimension restricted to one measurement system, ascending.
pub fn units_in_system(dimension: Dimension, system: MeasurementSystem) -> Vec<Unit> {
    units_for(dimension)
        .iter()
        .copied()
        .filter(|unit| unit.system() == system)
        .collect()
}

/// Every registered unit, grouped by dimension.
pub fn all_units() -> &'static [Unit] {
    &ALL_UNITS
}

/// The canonical (storage) unit of a dimension.
#[inline]
pub const fn canonical_unit(dimension: Dimension) -> Unit {
    match dimension {
        Dimension::Volume => Unit::Milliliter,
        Dimension::Weight => Unit::Gram,
    }
}

/// Resolves a unit symbol or alias typed by a user.
///
/// Matching ignores case and surrounding whitespace, accepts singular and
/// plural names, British spellings and a trailing period (`"oz."`).
///
/// # Errors
///
/// Returns [`ConversionError::UnknownUnit`] if nothing matches.
pub fn lookup(symbol: &str) -> ConversionResult<Unit> {
    let normalized = normalize_symbol(symbol);
    let unit = match normalized.as_str() {
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" | "cc" => {
            Unit::Milliliter
        }
        "l" | "liter" | "liters" | "litre" | "litres" | "ltr" => Unit::Liter,
        "fl oz" | "fl-oz" | "floz" | "fl. oz" | "fluid ounce" | "fluid ounces" => {
            Unit::FluidOunce
        }
        "gal" | "gals" | "gallon" | "gallons" => Unit::Gallon,
        "g" | "gram" | "grams" | "gramme" | "grammes" => Unit::Gram,
        "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => Unit::Kilogram,
        "oz" | "ounce" | "ounces" => Unit::Ounce,
        "lb" | "lbs" | "pound" | "pounds" => Unit::Pound,
        _ => return Err(ConversionError::UnknownUnit(symbol.trim().to_string())),
    };
    Ok(unit)
}

fn normalize_symbol(symbol: &str) -> String {
    let lowered = symbol.trim().trim_end_matches('.').to_lowercase();
    // collapse internal whitespace so "fl   oz" matches
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}
