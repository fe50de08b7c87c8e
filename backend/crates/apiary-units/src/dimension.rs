//! Dimensions and measurement systems.

use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;

use crate::error::ConversionError;

/// The category that decides which units are interchangeable.
///
/// A volume of syrup can be shown in millilitres or gallons, but never in grams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    /// Liquid amounts (syrup, treatment solutions). Canonical unit: millilitre.
    Volume,
    /// Solid amounts (fondant, pollen patties, strips). Canonical unit: gram.
    Weight,
}

impl Dimension {
    /// Every supported dimension.
    pub const ALL: [Dimension; 2] = [Dimension::Volume, Dimension::Weight];

    /// Lowercase identifier used in URLs and config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Volume => "volume",
            Dimension::Weight => "weight",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ConversionError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "volume" | "vol" => Ok(Dimension::Volume),
            "weight" | "mass" => Ok(Dimension::Weight),
            other => Err(ConversionError::UnknownDimension(other.to_string())),
        }
    }
}

/// Unit family a [`Unit`](crate::Unit) belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MeasurementSystem {
    /// SI-derived units (ml, l, g, kg).
    Metric,
    /// US customary / avoirdupois units (fl oz, gal, oz, lb).
    Imperial,
}

impl MeasurementSystem {
    /// Lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Imperial => "imperial",
        }
    }
}

impl Display for MeasurementSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementSystem {
    type Err = ConversionError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(MeasurementSystem::Metric),
            "imperial" | "us" | "customary" => Ok(MeasurementSystem::Imperial),
            other => Err(ConversionError::UnknownPreference(other.to_string())),
        }
    }
}

/// A user's unit preference, read from their settings.
///
/// This is an input to the resolver only; it is never stored by this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitPreference {
    /// Show millilitres/litres and grams/kilograms.
    #[default]
    Metric,
    /// Show fluid ounces/gallons and ounces/pounds.
    Imperial,
}

impl UnitPreference {
    /// The unit family this preference selects from.
    pub const fn system(self) -> MeasurementSystem {
        match self {
            UnitPreference::Metric => MeasurementSystem::Metric,
            UnitPreference::Imperial => MeasurementSystem::Imperial,
        }
    }

    /// Lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        self.system().as_str()
    }
}

impl Display for UnitPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitPreference {
    type Err = ConversionError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(match s.parse::<MeasurementSystem>()? {
            MeasurementSystem::Metric => UnitPreference::Metric,
            MeasurementSystem::Imperial => UnitPreference::Imperial,
        })
    }
}
