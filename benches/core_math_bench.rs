use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use storm_days::api::{DayGraphConfig, ZoomGeometry, plot_rect, render_to};
use storm_days::core::{AxisScale, DayGraphData, DayWindow, Storm, TrackEntry, Viewport, bin_by_day};

fn synthetic_storms(count: usize) -> Vec<Storm> {
    let base = Utc
        .with_ymd_and_hms(2021, 1, 1, 0, 0, 0)
        .single()
        .expect("valid base time");
    (0..count)
        .map(|i| {
            let start = base + Duration::days((i * 7 % 330) as i64);
            let track = (0..(4 + i % 40))
                .map(|step| TrackEntry::at(start + Duration::hours(6 * step as i64)))
                .collect();
            Storm::new(format!("AL{:02}2021", i % 100), None, 2021, track)
        })
        .collect()
}

fn bench_scale_for_range(c: &mut Criterion) {
    c.bench_function("axis_scale_for_range", |b| {
        b.iter(|| {
            let _ = AxisScale::for_range(black_box(0.0), black_box(12_345.0))
                .expect("valid scale");
        })
    });
}

fn bench_bin_by_day_2k(c: &mut Criterion) {
    let storms = synthetic_storms(2_000);
    let window = DayWindow::full_year();

    c.bench_function("bin_by_day_2k", |b| {
        b.iter(|| {
            let _ = bin_by_day(black_box(&storms), window.start(), window.end());
        })
    });
}

fn bench_zoom_geometry_and_frame(c: &mut Criterion) {
    let config = DayGraphConfig::new(Viewport::new(1600, 300));
    let data = DayGraphData::full_year(synthetic_storms(2_000), config.season);
    let rect = config.viewport.rect();
    let plot = plot_rect(rect, config.header_height_px).expect("plot rect");
    let scale = data.count_scale(config.tick_limit).expect("count scale");

    c.bench_function("zoom_geometry", |b| {
        b.iter(|| {
            let _ = ZoomGeometry::compute(&data, plot, black_box(0.37), &scale)
                .expect("geometry");
        })
    });

    c.bench_function("render_to_full_year", |b| {
        b.iter(|| {
            let _ = render_to(&data, rect, black_box(0.5), &config).expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_for_range,
    bench_bin_by_day_2k,
    bench_zoom_geometry_and_frame
);
criterion_main!(benches);
