use criterion::{black_box, criterion_group, criterion_main, Criterion};

use helioday::ephemeris::kepler::KeplerEphemeris;
use helioday::ephemeris::PositionProvider;
use helioday::search::{find_nearest_recurrence, ScanWindow};
use helioday::time::parse_utc;

fn bench_forward_year_scan(c: &mut Criterion) {
    let provider = KeplerEphemeris::new();
    let birth = parse_utc("1996-07-14T08:30:00").unwrap();
    let anchor = parse_utc("2026-01-05T00:00:00").unwrap();
    let reference = provider.position_at(&birth).unwrap();

    c.bench_function("forward_366_day_scan", |b| {
        b.iter(|| {
            find_nearest_recurrence(
                black_box(&reference),
                black_box(anchor),
                &ScanWindow::forward(0, 366),
                &provider,
            )
            .unwrap()
        })
    });
}

fn bench_backward_month_scan(c: &mut Criterion) {
    let provider = KeplerEphemeris::new();
    let birth = parse_utc("1996-07-14T08:30:00").unwrap();
    let anchor = parse_utc("2026-01-05T00:00:00").unwrap();
    let reference = provider.position_at(&birth).unwrap();

    c.bench_function("backward_30_day_scan", |b| {
        b.iter(|| {
            find_nearest_recurrence(
                black_box(&reference),
                black_box(anchor),
                &ScanWindow::backward(1, 30),
                &provider,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_forward_year_scan, bench_backward_month_scan);
criterion_main!(benches);
