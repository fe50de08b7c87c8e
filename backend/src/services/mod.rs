//! Service layer between the HTTP handlers and the conversion core.
//!
//! Services accept the loosely-typed values that arrive over the wire (unit
//! symbols, dimension names, optional preferences) and resolve them into the
//! closed types of `apiary_units` before doing any arithmetic.

pub mod conversion;

pub use conversion::{
    canonical_for, canonicalize, convert_amount, display_amount, list_units, parse_amount, resolve_precision,
    CanonicalAmount, ConvertedAmount, ParsedAmount,
};
