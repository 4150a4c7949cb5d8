// Benchmark for calendar grid generation and per-day lookups
// Measures month grid construction and the per-frame appointment queries

use chrono::{Duration, NaiveDate};
use clinic_desk::services::appointment::{appointments_on_date, AppointmentStore};
use clinic_desk::services::generator::{default_reference_date, load_roster, AppointmentGenerator};
use clinic_desk::utils::date::{month_grid_dates, week_dates};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_month_grid(c: &mut Criterion) {
    let anchor = NaiveDate::from_ymd_opt(2026, 2, 12).unwrap();

    c.bench_function("month_grid_dates", |b| {
        b.iter(|| month_grid_dates(black_box(anchor)))
    });

    c.bench_function("twelve_month_grids", |b| {
        b.iter(|| {
            (0..12)
                .map(|m| month_grid_dates(black_box(anchor + Duration::days(m * 31))).len())
                .sum::<usize>()
        })
    });
}

fn bench_lookups(c: &mut Criterion) {
    let roster = load_roster().unwrap();
    let mut group = c.benchmark_group("appointments_on_date");

    for repeats in [1usize, 5, 25] {
        let mut generated = Vec::new();
        for seed in 0..repeats as u64 {
            generated.extend(
                AppointmentGenerator::new(Some(seed), default_reference_date())
                    .generate_all(&roster),
            );
        }
        let store = AppointmentStore::new(generated);

        group.bench_with_input(BenchmarkId::new("week", store.len()), &store, |b, store| {
            b.iter(|| {
                week_dates(default_reference_date())
                    .iter()
                    .map(|day| appointments_on_date(store.all(), *day).len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_month_grid, bench_lookups);
criterion_main!(benches);
