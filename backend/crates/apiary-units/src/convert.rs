//! Conversion entry points.
//!
//! The [`Quantity`] methods do the arithmetic; this module exposes the same
//! operations as free functions, plus plain-`f64` variants for callers that
//! hold an amount and a unit separately (form fields, database columns).

use crate::error::ConversionResult;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// Converts `quantity` into `to_unit`.
///
/// # Errors
///
/// [`ConversionError::DimensionMismatch`](crate::ConversionError::DimensionMismatch)
/// when the units measure different dimensions.
///
/// ```rust
/// use apiary_units::{convert, Quantity, Unit};
///
/// let q = Quantity::new(1.5, Unit::Kilogram).unwrap();
/// assert_eq!(convert(q, Unit::Gram).unwrap().amount(), 1500.0);
/// ```
#[inline]
pub fn convert(quantity: Quantity, to_unit: Unit) -> ConversionResult<Quantity> {
    quantity.to(to_unit)
}

/// Converts `quantity` into the canonical unit of its dimension.
#[inline]
pub fn to_canonical(quantity: Quantity) -> Quantity {
    quantity.to_canonical()
}

/// Formats `quantity` with `precision` decimals and its unit symbol.
#[inline]
pub fn label(quantity: &Quantity, precision: usize) -> String {
    quantity.label(precision)
}

/// Converts a bare amount between units.
///
/// # Errors
///
/// * [`ConversionError::InvalidQuantity`](crate::ConversionError::InvalidQuantity) for
///   negative or non-finite amounts.
/// * [`ConversionError::DimensionMismatch`](crate::ConversionError::DimensionMismatch) for
///   incompatible units.
///
/// ```rust
/// use apiary_units::{convert_value, ConversionError, Unit};
///
/// assert_eq!(convert_value(1000.0, Unit::Milliliter, Unit::Liter).unwrap(), 1.0);
/// assert_eq!(
///     convert_value(-5.0, Unit::Gram, Unit::Kilogram),
///     Err(ConversionError::InvalidQuantity(-5.0))
/// );
/// ```
pub fn convert_value(amount: f64, from: Unit, to: Unit) -> ConversionResult<f64> {
    Ok(Quantity::new(amount, from)?.to(to)?.amount())
}

/// Normalizes a bare amount to the canonical unit of `unit`'s dimension.
///
/// This is what gets persisted on feeding and treatment records.
pub fn to_canonical_value(amount: f64, unit: Unit) -> ConversionResult<f64> {
    Ok(Quantity::new(amount, unit)?.to_canonical().amount())
}
