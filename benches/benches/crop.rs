// Copyright 2025 the Edgecrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use edgecrop_fit::{AnchorMode, ContentExtent, CropTransform, ViewportExtent, compute_crop};
use edgecrop_view::{ContentSource, CropController, Paintable, Placement};
use kurbo::Rect;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_extent(&mut self) -> (u32, u32) {
        (self.next_u32() % 4096, self.next_u32() % 4096)
    }
}

struct BenchHost {
    content: ContentExtent,
    applied: Option<Placement>,
}

impl ContentSource for BenchHost {
    fn intrinsic_extent(&self) -> Option<ContentExtent> {
        Some(self.content)
    }
}

impl Paintable for BenchHost {
    fn applied_placement(&self) -> Option<Placement> {
        self.applied
    }

    fn apply_transform(&mut self, transform: CropTransform, content_bounds: Rect) {
        self.applied = Some(Placement::Transformed {
            transform,
            content_bounds,
        });
    }

    fn apply_fill_bounds(&mut self, bounds: Rect) {
        self.applied = Some(Placement::Filled { bounds });
    }
}

fn build_cases(n: usize, seed: u64) -> Vec<(ViewportExtent, ContentExtent)> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let (vw, vh) = rng.gen_extent();
            let (iw, ih) = rng.gen_extent();
            (
                ViewportExtent::new(vw, vh),
                ContentExtent::new(iw as i32 - 16, ih as i32 - 16),
            )
        })
        .collect()
}

fn bench_compute_crop(c: &mut Criterion) {
    let mut group = c.benchmark_group("edgecrop/compute_crop");
    let cases = build_cases(1_024, 0xC0FFEE);

    for anchor in AnchorMode::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(anchor),
            &cases,
            |b, cases| {
                b.iter(|| {
                    for &(viewport, content) in cases {
                        black_box(compute_crop(
                            black_box(viewport),
                            black_box(content),
                            anchor,
                        ));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("edgecrop/controller");

    group.bench_function("paint_fresh", |b| {
        let mut host = BenchHost {
            content: ContentExtent::new(1920, 1080),
            applied: None,
        };
        let mut controller = CropController::with_anchor(AnchorMode::RightCrop);
        controller.on_bounds_changed(ViewportExtent::new(640, 640), &mut host);
        b.iter(|| black_box(controller.on_paint(&mut host)));
    });

    group.bench_function("resize_then_paint", |b| {
        let mut host = BenchHost {
            content: ContentExtent::new(1920, 1080),
            applied: None,
        };
        let mut controller = CropController::default();
        let mut rng = Lcg::new(7);
        b.iter(|| {
            let (vw, vh) = rng.gen_extent();
            controller.on_bounds_changed(ViewportExtent::new(vw, vh), &mut host);
            black_box(controller.on_paint(&mut host))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_crop, bench_controller);
criterion_main!(benches);
