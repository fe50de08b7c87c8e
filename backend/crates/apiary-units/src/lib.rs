//! Volume and weight units for apiary records.
//!
//! `apiary-units` is the measurement core behind feeding and treatment logs:
//!
//! - A closed set of [`Unit`]s, split across two [`Dimension`]s (volume and weight).
//! - A validated [`Quantity`] holding a non-negative amount in one unit.
//! - Conversion through the canonical unit of each dimension (`ml` and `g`).
//! - A resolver that picks the unit a user sees from their [`UnitPreference`]
//!   and the magnitude of the amount.
//!
//! Amounts are persisted canonically and converted on display, so a record never
//! changes when a user switches between metric and imperial.
//!
//! # Quick start
//!
//! ```rust
//! use apiary_units::{format_for_preference, parse_quantity, Dimension, UnitPreference};
//!
//! let syrup = parse_quantity("2,5 l").unwrap();
//! let stored = syrup.to_canonical();
//! assert_eq!(stored.amount(), 2500.0);
//!
//! let shown = format_for_preference(stored.amount(), Dimension::Volume, UnitPreference::Imperial).unwrap();
//! assert_eq!(shown.label, "84.54 fl oz");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for units, dimensions, preferences,
//!   quantities and display choices. Units travel as their symbol (`"fl oz"`).
//!
//! # Errors
//!
//! Every fallible operation returns [`ConversionResult`]. Cross-dimension
//! conversions and negative amounts are errors, never silent zeros.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod dimension;
pub mod error;
pub mod parse;
pub mod quantity;
pub mod registry;
pub mod resolver;
pub mod unit;

pub use convert::{convert, convert_value, label, to_canonical, to_canonical_value};
pub use dimension::{Dimension, MeasurementSystem, UnitPreference};
pub use error::{ConversionError, ConversionResult};
pub use parse::{parse_amount_in, parse_quantity};
pub use quantity::{Quantity, DEFAULT_PRECISION};
pub use registry::{canonical_unit, lookup, units_for, UnitMeta};
pub use resolver::{
    choose_display_unit, display_units, format_for_preference, format_for_preference_with_precision,
    DisplayChoice, DisplayPolicy,
};
pub use unit::Unit;
