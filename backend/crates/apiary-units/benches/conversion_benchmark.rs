use std::hint::black_box;

use apiary_units::{
    choose_display_unit, convert_value, format_for_preference, parse_quantity, registry, Dimension, Unit,
    UnitPreference,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    group.bench_function("gallon_to_milliliter", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let amount = i as f64 * 0.25;
                let _ = black_box(convert_value(black_box(amount), Unit::Gallon, Unit::Milliliter));
            }
        });
    });

    group.bench_function("all_volume_pairs", |b| {
        let units = registry::units_for(Dimension::Volume);
        b.iter(|| {
            for from in units {
                for to in units {
                    let _ = black_box(convert_value(black_box(42.0), *from, *to));
                }
            }
        });
    });

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    for pref in [UnitPreference::Metric, UnitPreference::Imperial] {
        group.bench_with_input(BenchmarkId::new("choose_display_unit", pref), &pref, |b, pref| {
            b.iter(|| {
                for i in 0..1000 {
                    black_box(choose_display_unit(black_box(i as f64 * 7.5), Dimension::Weight, *pref));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("format_for_preference", pref), &pref, |b, pref| {
            b.iter(|| format_for_preference(black_box(2500.0), Dimension::Volume, *pref));
        });
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for input in ["500ml", "2,5 L", "8 fl oz", "3 lbs"] {
        group.bench_with_input(BenchmarkId::new("parse_quantity", input), &input, |b, input| {
            b.iter(|| parse_quantity(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert, bench_resolver, bench_parsing);
criterion_main!(benches);
