//! Parsing user-typed amounts such as `"2.5 l"` or `"500ml"`.
//!
//! This is the only place where [`ConversionError::UnknownUnit`] can reach a
//! caller: everything past the input boundary works with the closed [`Unit`] enum.

use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConversionError, ConversionResult};
use crate::quantity::Quantity;
use crate::registry;
use crate::unit::Unit;

// amount (optionally with exponent), optional whitespace, then whatever unit text follows
static AMOUNT_AND_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:[.,]\d+)?|[.,]\d+)(?:[eE][+-]?\d+)?)\s*(.*?)\s*$")
        .expect("Failed to compile amount pattern")
});

/// Splits text into a numeric amount and the (possibly empty) unit text.
fn split_amount(text: &str) -> ConversionResult<(f64, &str)> {
    let caps = AMOUNT_AND_UNIT
        .captures(text)
        .ok_or_else(|| ConversionError::Unparseable(text.trim().to_string()))?;

    // comma is accepted as a decimal separator ("2,5 l")
    let amount = caps[1]
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ConversionError::Unparseable(text.trim().to_string()))?;
    let unit = caps.get(2).map_or("", |m| m.as_str());
    // leftovers of a malformed number ("1.2.3 l", "3 / 4 gal") are not a unit
    if unit.starts_with(|c: char| !c.is_alphabetic()) {
        return Err(ConversionError::Unparseable(text.trim().to_string()));
    }
    Ok((amount, unit))
}

/// Parses `"<amount> <unit>"`, e.g. `"2.5 l"`, `"2,5L"`, `"8 fl oz"`, `"3 lbs"`.
///
/// # Errors
///
/// * [`ConversionError::Unparseable`] if the text does not start with a number
///   or carries no unit.
/// * [`ConversionError::UnknownUnit`] if the unit text is not recognized.
/// * [`ConversionError::InvalidQuantity`] for negative amounts.
///
/// ```rust
/// use apiary_units::{parse_quantity, Unit};
///
/// let q = parse_quantity("500ml").unwrap();
/// assert_eq!(q.unit(), Unit::Milliliter);
/// assert_eq!(q.amount(), 500.0);
/// ```
pub fn parse_quantity(text: &str) -> ConversionResult<Quantity> {
    let (amount, unit_text) = split_amount(text)?;
    if unit_text.is_empty() {
        return Err(ConversionError::Unparseable(text.trim().to_string()));
    }
    let unit = registry::lookup(unit_text)?;
    Quantity::new(amount, unit)
}

/// Parses an amount whose unit may be omitted, falling back to `default_unit`.
///
/// Form fields often pair a bare number input with a unit selector; an explicit
/// unit in the text wins over the selector but must be in the same dimension.
///
/// # Errors
///
/// As [`parse_quantity`], plus [`ConversionError::DimensionMismatch`] if the typed
/// unit measures a different dimension than `default_unit`.
pub fn parse_amount_in(text: &str, default_unit: Unit) -> ConversionResult<Quantity> {
    let (amount, unit_text) = split_amount(text)?;
    let unit = if unit_text.is_empty() {
        default_unit
    } else {
        registry::lookup(unit_text)?
    };
    if unit.dimension() != default_unit.dimension() {
        return Err(ConversionError::DimensionMismatch {
            from: unit.dimension(),
            to: default_unit.dimension(),
        });
    }
    Quantity::new(amount, unit)
}

impl FromStr for Quantity {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    #[test]
    fn parses_common_forms() {
        let cases = [
            ("2.5 l", 2.5, Unit::Liter),
            ("2,5L", 2.5, Unit::Liter),
            ("500ml", 500.0, Unit::Milliliter),
            ("1 gal", 1.0, Unit::Gallon),
            ("8 fl oz", 8.0, Unit::FluidOunce),
            ("3 lbs", 3.0, Unit::Pound),
            ("  .5 kg  ", 0.5, Unit::Kilogram),
            ("+12 Grams", 12.0, Unit::Gram),
            ("1e3 ml", 1000.0, Unit::Milliliter),
            ("2.5E-1kg", 0.25, Unit::Kilogram),
        ];
        for (text, amount, unit) in cases {
            let q = parse_quantity(text).unwrap_or_else(|e| panic!("{text}: {e}"));
            assert_eq!(q.amount(), amount, "{text}");
            assert_eq!(q.unit(), unit, "{text}");
        }
    }

    #[test]
    fn from_str_delegates() {
        let q: Quantity = "750 ml".parse().unwrap();
        assert_eq!(q.to_canonical().amount(), 750.0);
    }

    #[test]
    fn negative_amount_is_invalid() {
        assert_eq!(parse_quantity("-1 kg"), Err(ConversionError::InvalidQuantity(-1.0)));
    }

    #[test]
    fn unknown_unit_is_reported() {
        assert_eq!(
            parse_quantity("5 furlongs"),
            Err(ConversionError::UnknownUnit("furlongs".to_string()))
        );
    }

    #[test]
    fn text_without_amount_or_unit_is_unparseable() {
        assert_eq!(parse_quantity("lots"), Err(ConversionError::Unparseable("lots".to_string())));
        assert_eq!(parse_quantity("12"), Err(ConversionError::Unparseable("12".to_string())));
        assert!(matches!(parse_quantity(""), Err(ConversionError::Unparseable(_))));
    }

    #[test]
    fn malformed_numbers_are_unparseable() {
        for text in ["1.2.3 l", "1,5,0 kg", "3 / 4 gal"] {
            assert_eq!(
                parse_quantity(text),
                Err(ConversionError::Unparseable(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn exponent_overflow_is_invalid_quantity() {
        assert!(matches!(
            parse_quantity("1e400 ml"),
            Err(ConversionError::InvalidQuantity(v)) if v.is_infinite()
        ));
    }

    #[test]
    fn bare_amount_uses_default_unit() {
        let q = parse_amount_in("250", Unit::Milliliter).unwrap();
        assert_eq!(q.unit(), Unit::Milliliter);
        assert_eq!(q.amount(), 250.0);
    }

    #[test]
    fn explicit_unit_overrides_default() {
        let q = parse_amount_in("2 l", Unit::Milliliter).unwrap();
        assert_eq!(q.unit(), Unit::Liter);
    }

    #[test]
    fn explicit_unit_must_match_dimension() {
        assert_eq!(
            parse_amount_in("2 kg", Unit::Milliliter),
            Err(ConversionError::DimensionMismatch {
                from: Dimension::Weight,
                to: Dimension::Volume,
            })
        );
    }
}
