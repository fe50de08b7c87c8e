//! Unit-preference resolver.
//!
//! Picks the unit a user should see for a canonical amount, given their
//! preference. The policy is a pure decision table keyed by dimension,
//! preference and magnitude band:
//!
//! | Dimension | Preference | Below threshold | At or above threshold |
//! |-----------|------------|-----------------|-----------------------|
//! | Volume    | Metric     | ml              | l (1000 ml)           |
//! | Volume    | Imperial   | fl oz           | gal (128 fl oz)       |
//! | Weight    | Metric     | g               | kg (1000 g)           |
//! | Weight    | Imperial   | oz              | lb (16 oz)            |
//!
//! The threshold is always "one of the larger unit". It is compared in
//! canonical units against the larger unit's factor, which equals comparing the
//! small-unit amount against 1000/128/16 without rounding drift at the boundary.

use crate::dimension::{Dimension, UnitPreference};
use crate::error::ConversionResult;
use crate::quantity::{Quantity, DEFAULT_PRECISION};
use crate::registry;
use crate::unit::Unit;

/// The two display units used for one (dimension, preference) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayPolicy {
    /// Unit used below the threshold.
    pub small: Unit,
    /// Unit used once the amount reaches one of it.
    pub large: Unit,
}

impl DisplayPolicy {
    /// Policy row for `dimension` and `preference`.
    pub const fn for_preference(dimension: Dimension, preference: UnitPreference) -> Self {
        let (small, large) = match (dimension, preference) {
            (Dimension::Volume, UnitPreference::Metric) => (Unit::Milliliter, Unit::Liter),
            (Dimension::Volume, UnitPreference::Imperial) => (Unit::FluidOunce, Unit::Gallon),
            (Dimension::Weight, UnitPreference::Metric) => (Unit::Gram, Unit::Kilogram),
            (Dimension::Weight, UnitPreference::Imperial) => (Unit::Ounce, Unit::Pound),
        };
        Self { small, large }
    }

    /// Canonical amount at which `large` takes over (inclusive).
    pub const fn threshold(&self) -> f64 {
        self.large.factor_to_canonical()
    }

    /// How many `small` units make up the threshold (1000, 128 or 16).
    pub fn threshold_in_small_units(&self) -> f64 {
        self.threshold() / self.small.factor_to_canonical()
    }

    /// Applies the policy to a canonical amount.
    pub fn choose(&self, canonical_amount: f64) -> Unit {
        if canonical_amount < self.threshold() {
            self.small
        } else {
            self.large
        }
    }
}

/// Units a user with `preference` may see for `dimension`, smallest first.
pub const fn display_units(dimension: Dimension, preference: UnitPreference) -> (Unit, Unit) {
    let policy = DisplayPolicy::for_preference(dimension, preference);
    (policy.small, policy.large)
}

/// Picks the most natural display unit for a canonical amount.
///
/// `canonical_amount` is in millilitres for volume and grams for weight.
///
/// ```rust
/// use apiary_units::{choose_display_unit, Dimension, Unit, UnitPreference};
///
/// assert_eq!(choose_display_unit(999.0, Dimension::Volume, UnitPreference::Metric), Unit::Milliliter);
/// assert_eq!(choose_display_unit(1000.0, Dimension::Volume, UnitPreference::Metric), Unit::Liter);
/// ```
pub fn choose_display_unit(
    canonical_amount: f64,
    dimension: Dimension,
    preference: UnitPreference,
) -> Unit {
    DisplayPolicy::for_preference(dimension, preference).choose(canonical_amount)
}

/// A canonical amount rendered for one user. Recomputed on every call, never stored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayChoice {
    /// Amount in `unit`, unrounded.
    pub value: f64,
    /// The chosen display unit (serialized as its symbol).
    pub unit: Unit,
    /// `value` rounded to the requested precision, followed by the symbol.
    pub label: String,
}

impl DisplayChoice {
    /// The displayed amount as a [`Quantity`].
    pub fn quantity(&self) -> ConversionResult<Quantity> {
        Quantity::new(self.value, self.unit)
    }
}

/// Formats a canonical amount for a user's preference with two decimals.
///
/// # Errors
///
/// [`ConversionError::InvalidQuantity`](crate::ConversionError::InvalidQuantity) if the
/// amount is negative or non-finite.
///
/// ```rust
/// use apiary_units::{format_for_preference, Dimension, Unit, UnitPreference};
///
/// let choice = format_for_preference(1500.0, Dimension::Volume, UnitPreference::Metric).unwrap();
/// assert_eq!(choice.unit, Unit::Liter);
/// assert_eq!(choice.label, "1.50 l");
/// ```
pub fn format_for_preference(
    canonical_amount: f64,
    dimension: Dimension,
    preference: UnitPreference,
) -> ConversionResult<DisplayChoice> {
    format_for_preference_with_precision(canonical_amount, dimension, preference, DEFAULT_PRECISION)
}

/// Like [`format_for_preference`] with an explicit number of decimals.
pub fn format_for_preference_with_precision(
    canonical_amount: f64,
    dimension: Dimension,
    preference: UnitPreference,
    precision: usize,
) -> ConversionResult<DisplayChoice> {
    let canonical = Quantity::new(canonical_amount, registry::canonical_unit(dimension))?;
    let unit = choose_display_unit(canonical_amount, dimension, preference);
    let shown = canonical.to(unit)?;
    Ok(DisplayChoice {
        value: shown.amount(),
        unit,
        label: shown.label(precision),
    })
}
