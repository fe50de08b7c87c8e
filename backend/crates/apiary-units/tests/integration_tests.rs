//! Integration-level tests for the public `apiary_units` API.

use apiary_units::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};

// ─────────────────────────────────────────────────────────────────────────────
// Storage path: user input -> canonical amount
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn feeding_entry_is_stored_in_milliliters() {
    let typed = parse_quantity("1 gal").unwrap();
    let stored = to_canonical(typed);
    assert_eq!(stored.unit(), Unit::Milliliter);
    assert_relative_eq!(stored.amount(), 3785.411784, max_relative = 1e-12);
}

#[test]
fn treatment_entry_is_stored_in_grams() {
    let typed = parse_quantity("3 lbs").unwrap();
    assert_relative_eq!(to_canonical(typed).amount(), 1360.77711, max_relative = 1e-12);
}

#[test]
fn form_field_with_unit_selector() {
    let q = parse_amount_in("12", Unit::FluidOunce).unwrap();
    assert_relative_eq!(to_canonical_value(q.amount(), q.unit()).unwrap(), 354.88235475, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Display path: canonical amount -> user's preferred unit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn same_record_renders_for_both_preferences() {
    let stored = 2000.0;
    let metric = format_for_preference(stored, Dimension::Weight, UnitPreference::Metric).unwrap();
    let imperial = format_for_preference(stored, Dimension::Weight, UnitPreference::Imperial).unwrap();

    assert_eq!(metric.unit, Unit::Kilogram);
    assert_eq!(metric.label, "2.00 kg");
    assert_eq!(imperial.unit, Unit::Pound);
    assert_eq!(imperial.label, "4.41 lb");
}

#[test]
fn displayed_value_converts_back_to_stored_amount() {
    for dim in Dimension::ALL {
        for pref in [UnitPreference::Metric, UnitPreference::Imperial] {
            for stored in [0.0, 12.5, 999.0, 1000.0, 5000.0, 123_456.0] {
                let choice = format_for_preference(stored, dim, pref).unwrap();
                let back = to_canonical_value(choice.value, choice.unit).unwrap();
                assert_abs_diff_eq!(back, stored, epsilon = 1e-9 * stored.max(1.0));
            }
        }
    }
}

#[test]
fn chosen_unit_always_matches_preference_family() {
    for dim in Dimension::ALL {
        for pref in [UnitPreference::Metric, UnitPreference::Imperial] {
            for stored in [0.0, 1.0, 500.0, 4000.0, 1e7] {
                let unit = choose_display_unit(stored, dim, pref);
                assert_eq!(unit.dimension(), dim);
                assert_eq!(unit.system(), pref.system());
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion table
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn known_conversions() {
    let cases = [
        (1.0, Unit::Liter, Unit::Milliliter, 1000.0),
        (1.0, Unit::Gallon, Unit::FluidOunce, 128.0),
        (1.0, Unit::Gallon, Unit::Liter, 3.785411784),
        (1.0, Unit::Pound, Unit::Ounce, 16.0),
        (1.0, Unit::Kilogram, Unit::Pound, 2.204622621848776),
        (250.0, Unit::Milliliter, Unit::FluidOunce, 8.453505675460753),
    ];
    for (amount, from, to, expected) in cases {
        let got = convert_value(amount, from, to).unwrap();
        assert_relative_eq!(got, expected, max_relative = 1e-12);
    }
}

#[test]
fn every_cross_dimension_pair_is_rejected() {
    for from in registry::all_units() {
        for to in registry::all_units() {
            let result = convert_value(1.0, *from, *to);
            if from.dimension() == to.dimension() {
                assert!(result.is_ok(), "{from} -> {to}");
            } else {
                assert_eq!(
                    result,
                    Err(ConversionError::DimensionMismatch {
                        from: from.dimension(),
                        to: to.dimension(),
                    })
                );
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn input_errors_carry_stable_codes() {
    assert_eq!(parse_quantity("-1 kg").unwrap_err().code(), "INVALID_QUANTITY");
    assert_eq!(parse_quantity("5 furlongs").unwrap_err().code(), "UNKNOWN_UNIT");
    assert_eq!(parse_quantity("lots").unwrap_err().code(), "UNPARSEABLE");
    assert_eq!("cubits".parse::<Dimension>().unwrap_err().code(), "UNKNOWN_DIMENSION");
    assert_eq!("martian".parse::<UnitPreference>().unwrap_err().code(), "UNKNOWN_PREFERENCE");
}

#[test]
fn error_messages_are_readable() {
    let err = convert_value(1.0, Unit::Liter, Unit::Gram).unwrap_err();
    assert_eq!(err.to_string(), "Cannot convert between volume and weight");
}
