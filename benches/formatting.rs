use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use utilkit::{format_date, format_date_value, parse_date, Layout, Value};

fn benchmark_format_typed(c: &mut Criterion) {
    let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(13, 7, 0)
        .unwrap();

    let mut group = c.benchmark_group("format_typed");
    for layout in [Layout::Eu, Layout::Us, Layout::Database] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", layout)),
            &layout,
            |b, layout| b.iter(|| format_date(black_box(dt), *layout)),
        );
    }
    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_date");
    for input in ["2024-03-05T13:07:00Z", "2024-03-05 13:07", "March 5, 2024"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| parse_date(black_box(input)))
        });
    }
    group.finish();
}

fn benchmark_format_value(c: &mut Criterion) {
    let date = Value::from("2024-03-05 13:07");
    let layout = Value::from("2");
    let no_time = Value::from(false);
    let dash = Value::from("-");

    c.bench_function("format_date_value", |b| {
        b.iter(|| {
            format_date_value(
                black_box(&date),
                black_box(&layout),
                Some(&no_time),
                Some(&dash),
            )
        })
    });
}

criterion_group!(
    benches,
    benchmark_format_typed,
    benchmark_parse,
    benchmark_format_value
);
criterion_main!(benches);
