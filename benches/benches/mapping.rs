// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use letterbox_geometry::{Point, Rect, Size};
use letterbox_layout::mapping::{virtual_to_window, window_to_virtual};
use letterbox_layout::{DisplayArea, RotationMode};

fn bench_window_to_virtual(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping/window_to_virtual");
    let area = DisplayArea::new(Rect::new(160, 0, 1120, 720), Size::new(320, 240));

    // One pointer sample per window pixel along a diagonal sweep.
    let points: Vec<Point> = (0..1280).map(|i| Point::new(i, i * 720 / 1280)).collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    for rotation in [RotationMode::Normal, RotationMode::Rotate90] {
        group.bench_with_input(
            BenchmarkId::from_parameter(rotation.degrees()),
            &points,
            |b, points| {
                b.iter(|| {
                    for &p in points {
                        let _ = black_box(window_to_virtual(&area, rotation, p));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping/round_trip");
    let area = DisplayArea::new(Rect::new(0, 0, 2560, 1440), Size::new(640, 360));
    let points: Vec<Point> = (0..360).map(|y| Point::new(y * 640 / 360, y)).collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("normal", |b| {
        b.iter(|| {
            for &p in &points {
                let back = virtual_to_window(&area, RotationMode::Normal, p)
                    .and_then(|w| window_to_virtual(&area, RotationMode::Normal, w));
                let _ = black_box(back);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_window_to_virtual, bench_round_trip);
criterion_main!(benches);
