use criterion::{Criterion, criterion_group, criterion_main};
use esdate::{Date, Harness, LocalZone, OutputStream, find_case, run_case};
use std::hint::black_box;

// Micro-benchmarks for the local-time paths the regression cases lean on.

// Initialize logger for benchmark so `RUST_LOG` is honored.
#[ctor::ctor]
fn __init_bench_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).try_init();
}

fn bench_construct_and_format(c: &mut Criterion) {
    let zone = LocalZone::System;
    c.bench_function("date_components_to_locale_string", |b| {
        b.iter(|| {
            let d = Date::from_components(zone, black_box(&[1900.0, 3.0, 2.0, 8.0, 10.0, 30.0]));
            black_box(d.to_locale_string())
        })
    });
}

fn bench_set_seconds(c: &mut Criterion) {
    let zone = LocalZone::utc();
    let base = Date::from_components(zone, &[1900.0, 3.0, 2.0, 8.0, 10.0, 30.0]);
    c.bench_function("date_set_seconds", |b| {
        b.iter(|| {
            let mut d = base;
            black_box(d.set_seconds(black_box(20.0), Some(123.0)))
        })
    });
}

fn bench_case_1030(c: &mut Criterion) {
    let case = find_case("1030").expect("case 1030 is registered");
    c.bench_function("testsuite_case_1030", |b| {
        b.iter(|| {
            let mut h = Harness::new(LocalZone::utc(), OutputStream::buffer());
            black_box(run_case(case, &mut h).expect("buffered output cannot fail"))
        })
    });
}

criterion_group!(benches, bench_construct_and_format, bench_set_seconds, bench_case_1030);
criterion_main!(benches);
