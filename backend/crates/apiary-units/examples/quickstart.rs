//! Store a syrup feeding in canonical units, then show it to a metric and an imperial user.

use apiary_units::{format_for_preference, parse_quantity, Dimension, UnitPreference};

fn main() {
    let typed = parse_quantity("2,5 l").expect("valid amount");
    let stored = typed.to_canonical();
    println!("stored: {stored}");

    for pref in [UnitPreference::Metric, UnitPreference::Imperial] {
        let choice = format_for_preference(stored.amount(), Dimension::Volume, pref).expect("non-negative");
        println!("{pref}: {}", choice.label);
    }
}
