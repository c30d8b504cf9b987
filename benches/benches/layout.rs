// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use letterbox_geometry::{Insets, Point, Rect, Size};
use letterbox_layout::{
    Alignment, DisplayArea, DisplayBackend, DisplayConfig, RotationMode, Shake, StretchPolicy,
    WindowedDisplay, compute_draw_rect, desired_game_aspect,
};

struct Host {
    insets: Insets,
}

impl DisplayBackend for Host {
    fn game_size(&self) -> Size {
        Size::new(320, 200)
    }

    fn overlay_size(&self) -> Size {
        Size::new(640, 480)
    }

    fn game_needs_aspect_ratio_correction(&self) -> bool {
        true
    }

    fn safe_area_insets(&self) -> Insets {
        self.insets
    }

    fn handle_resize(&mut self, _width: i32, _height: i32) {}

    fn set_system_pointer_position(&mut self, _position: Point) {}

    fn active_area_changed(&mut self, area: &DisplayArea) {
        black_box(area);
    }
}

fn bench_compute_draw_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/compute_draw_rect");
    let native = Size::new(320, 200);
    let aspect = desired_game_aspect(native, true);
    let safe = Rect::new(44, 0, 2556, 1179);

    for policy in StretchPolicy::ALL {
        group.bench_with_input(BenchmarkId::new(policy.name(), "plain"), &policy, |b, &p| {
            b.iter(|| {
                black_box(compute_draw_rect(
                    black_box(native),
                    aspect,
                    p,
                    black_box(safe),
                    RotationMode::Normal,
                    Alignment::CENTERED,
                    None,
                ))
            });
        });

        group.bench_with_input(
            BenchmarkId::new(policy.name(), "rotated_shaken"),
            &policy,
            |b, &p| {
                let shake = Some(Shake {
                    offset: Point::new(3, -2),
                    reference: native,
                });
                b.iter(|| {
                    black_box(compute_draw_rect(
                        black_box(native),
                        aspect,
                        p,
                        black_box(safe),
                        RotationMode::Rotate90,
                        Alignment::from_bits(0b0101),
                        shake,
                    ))
                });
            },
        );
    }

    group.finish();
}

fn bench_recalculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/recalculate_display_areas");

    for (name, window) in [
        ("720p", Size::new(1280, 720)),
        ("phone", Size::new(2556, 1179)),
        ("4k", Size::new(3840, 2160)),
    ] {
        let config = DisplayConfig {
            stretch: StretchPolicy::IntegralAspectRatio,
            ..DisplayConfig::default()
        };
        let host = Host {
            insets: Insets::new(59, 0, 59, 21),
        };
        let mut display = WindowedDisplay::with_config(host, config);
        display.handle_resize(window.width, window.height);

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                display.recalculate_display_areas();
                black_box(display.game_area());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_draw_rect, bench_recalculate);
criterion_main!(benches);
