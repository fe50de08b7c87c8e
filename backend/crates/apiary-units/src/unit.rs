//! The closed set of units used on feeding and treatment records.

use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;

use crate::dimension::{Dimension, MeasurementSystem};
use crate::error::ConversionError;
use crate::registry;

/// Millilitres in one US fluid ounce (exact).
pub const MILLILITERS_PER_FLUID_OUNCE: f64 = 29.573_529_562_5;
/// Fluid ounces in one US gallon (exact).
pub const FLUID_OUNCES_PER_GALLON: f64 = 128.0;
/// Millilitres in one litre.
pub const MILLILITERS_PER_LITER: f64 = 1000.0;

/// Grams in one avoirdupois pound (exact).
pub const GRAMS_PER_POUND: f64 = 453.592_37;
/// Ounces in one avoirdupois pound (exact).
pub const OUNCES_PER_POUND: f64 = 16.0;
/// Grams in one kilogram.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// A unit of volume or weight.
///
/// Each variant carries a fixed conversion factor to the canonical unit of its
/// [`Dimension`]:
///
/// * `factor_to_canonical` is the number of canonical units in one of this unit.
///   Litres use `1000.0` because `1 l = 1000 ml`.
/// * The canonical unit of each dimension ([`Unit::Milliliter`], [`Unit::Gram`])
///   has a factor of exactly `1.0`.
///
/// Because the set is closed, internal callers can never name an unknown unit;
/// [`ConversionError::UnknownUnit`] only surfaces when parsing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Millilitre (`ml`), canonical volume unit.
    Milliliter,
    /// Litre (`l`).
    Liter,
    /// US fluid ounce (`fl oz`).
    FluidOunce,
    /// US liquid gallon (`gal`).
    Gallon,
    /// Gram (`g`), canonical weight unit.
    Gram,
    /// Kilogram (`kg`).
    Kilogram,
    /// Avoirdupois ounce (`oz`).
    Ounce,
    /// Avoirdupois pound (`lb`).
    Pound,
}

impl Unit {
    /// Printable symbol, shown in labels.
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::FluidOunce => "fl oz",
            Unit::Gallon => "gal",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
        }
    }

    /// Human-readable plural name.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Milliliter => "Milliliters",
            Unit::Liter => "Liters",
            Unit::FluidOunce => "Fluid Ounces",
            Unit::Gallon => "Gallons",
            Unit::Gram => "Grams",
            Unit::Kilogram => "Kilograms",
            Unit::Ounce => "Ounces",
            Unit::Pound => "Pounds",
        }
    }

    /// Dimension this unit measures.
    pub const fn dimension(self) -> Dimension {
        match self {
            Unit::Milliliter | Unit::Liter | Unit::FluidOunce | Unit::Gallon => Dimension::Volume,
            Unit::Gram | Unit::Kilogram | Unit::Ounce | Unit::Pound => Dimension::Weight,
        }
    }

    /// Unit family.
    pub const fn system(self) -> MeasurementSystem {
        match self {
            Unit::Milliliter | Unit::Liter | Unit::Gram | Unit::Kilogram => {
                MeasurementSystem::Metric
            }
            Unit::FluidOunce | Unit::Gallon | Unit::Ounce | Unit::Pound => {
                MeasurementSystem::Imperial
            }
        }
    }

    /// Unit-to-canonical conversion factor.
    pub const fn factor_to_canonical(self) -> f64 {
        match self {
            Unit::Milliliter => 1.0,
            Unit::Liter => MILLILITERS_PER_LITER,
            Unit::FluidOunce => MILLILITERS_PER_FLUID_OUNCE,
            Unit::Gallon => FLUID_OUNCES_PER_GALLON * MILLILITERS_PER_FLUID_OUNCE,
            Unit::Gram => 1.0,
            Unit::Kilogram => GRAMS_PER_KILOGRAM,
            Unit::Ounce => GRAMS_PER_POUND / OUNCES_PER_POUND,
            Unit::Pound => GRAMS_PER_POUND,
        }
    }

    /// Whether this is the canonical unit of its dimension.
    pub const fn is_canonical(self) -> bool {
        matches!(self, Unit::Milliliter | Unit::Gram)
    }

    /// Whether `other` measures the same dimension.
    pub fn is_compatible(self, other: Unit) -> bool {
        self.dimension() == other.dimension()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ConversionError;

    /// Resolves a symbol or alias; see [`registry::lookup`].
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        registry::lookup(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let symbol = String::deserialize(deserializer)?;
        registry::lookup(&symbol).map_err(serde::de::Error::custom)
    }
}
