//! Quantity type and its implementations.

use core::fmt::{Display, Formatter};

use crate::dimension::Dimension;
use crate::error::{ConversionError, ConversionResult};
use crate::registry;
use crate::unit::Unit;

/// Decimal places used when no precision is requested.
pub const DEFAULT_PRECISION: usize = 2;

/// An amount tagged with its unit.
///
/// Quantities are immutable value objects. The constructor rejects negative,
/// NaN and infinite amounts, and amounts whose canonical equivalent overflows
/// `f64`. Every `Quantity` in circulation therefore holds a finite amount
/// `>= 0` in its own unit and in every other unit of its dimension.
///
/// # Examples
///
/// ```rust
/// use apiary_units::{Quantity, Unit};
///
/// let syrup = Quantity::new(2.5, Unit::Liter).unwrap();
/// let ml = syrup.to(Unit::Milliliter).unwrap();
/// assert_eq!(ml.amount(), 2500.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawQuantity"))]
pub struct Quantity {
    amount: f64,
    unit: Unit,
}

impl Quantity {
    /// Creates a quantity, validating the amount.
    ///
    /// # Errors
    ///
    /// [`ConversionError::InvalidQuantity`] if `amount` is negative, NaN or infinite,
    /// or too large to express in the canonical unit (`1e306 gal`).
    ///
    /// ```rust
    /// use apiary_units::{ConversionError, Quantity, Unit};
    /// assert_eq!(
    ///     Quantity::new(-5.0, Unit::Gram),
    ///     Err(ConversionError::InvalidQuantity(-5.0))
    /// );
    /// ```
    pub fn new(amount: f64, unit: Unit) -> ConversionResult<Self> {
        // every factor is >= 1, so a finite canonical amount stays finite in any unit
        if !amount.is_finite() || amount < 0.0 || !(amount * unit.factor_to_canonical()).is_finite() {
            return Err(ConversionError::InvalidQuantity(amount));
        }
        // normalize -0.0 so labels never print "-0.00"
        Ok(Self {
            amount: amount + 0.0,
            unit,
        })
    }

    /// A zero amount in `unit`.
    pub const fn zero(unit: Unit) -> Self {
        Self { amount: 0.0, unit }
    }

    /// Returns the raw numeric amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the unit.
    #[inline]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Dimension of the unit.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// # Errors
    ///
    /// [`ConversionError::DimensionMismatch`] if `target` measures a different dimension.
    pub fn to(self, target: Unit) -> ConversionResult<Quantity> {
        if !self.unit.is_compatible(target) {
            return Err(ConversionError::DimensionMismatch {
                from: self.unit.dimension(),
                to: target.dimension(),
            });
        }
        if self.unit == target {
            return Ok(self);
        }
        let canonical = self.amount * self.unit.factor_to_canonical();
        Ok(Quantity {
            amount: canonical / target.factor_to_canonical(),
            unit: target,
        })
    }

    /// Converts to the canonical unit of this quantity's dimension.
    pub fn to_canonical(self) -> Quantity {
        let canonical = registry::canonical_unit(self.dimension());
        Quantity {
            amount: self.amount * self.unit.factor_to_canonical(),
            unit: canonical,
        }
    }

    /// Formats the amount with exactly `precision` decimals followed by the symbol.
    ///
    /// Trailing zeros are kept: this is a display contract.
    ///
    /// ```rust
    /// use apiary_units::{Quantity, Unit};
    /// let q = Quantity::new(2.5, Unit::Liter).unwrap();
    /// assert_eq!(q.label(2), "2.50 l");
    /// assert_eq!(q.label(0), "2 l");
    /// ```
    pub fn label(&self, precision: usize) -> String {
        format!("{:.*} {}", precision, self.amount, self.unit.symbol())
    }
}

impl Display for Quantity {
    /// Uses the formatter precision if given, [`DEFAULT_PRECISION`] otherwise.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str(&self.label(precision))
    }
}

/// Wire shape of a [`Quantity`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawQuantity {
    amount: f64,
    unit: Unit,
}

#[cfg(feature = "serde")]
impl TryFrom<RawQuantity> for Quantity {
    type Error = ConversionError;

    fn try_from(raw: RawQuantity) -> Result<Self, Self::Error> {
        Quantity::new(raw.amount, raw.unit)
    }
}
