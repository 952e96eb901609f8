// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use epiphyte_placement::{solve, PlacementList, Space};
use kurbo::{Rect, Size};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Anchors scattered well inside the boundary: the first preference almost
/// always fits.
fn gen_interior_anchors(count: usize, boundary: Rect) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = boundary.width() * (0.25 + rng.next_f64() * 0.5);
        let y0 = boundary.height() * (0.25 + rng.next_f64() * 0.5);
        out.push(Rect::new(x0, y0, x0 + 24.0, y0 + 12.0));
    }
    out
}

/// Anchors hugging the boundary edges: most candidates miss, exercising the
/// full fallback walk and the clamping path.
fn gen_edge_anchors(count: usize, boundary: Rect) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for i in 0..count {
        let along = rng.next_f64() * (boundary.width() - 24.0);
        let rect = match i % 4 {
            0 => Rect::new(along, 0.0, along + 24.0, 12.0),
            1 => Rect::new(along, boundary.y1 - 12.0, along + 24.0, boundary.y1),
            2 => Rect::new(0.0, along.min(boundary.y1 - 12.0), 24.0, along.min(boundary.y1 - 12.0) + 12.0),
            _ => Rect::new(boundary.x1 - 24.0, along.min(boundary.y1 - 12.0), boundary.x1, along.min(boundary.y1 - 12.0) + 12.0),
        };
        out.push(rect);
    }
    out
}

fn bench_solve(c: &mut Criterion) {
    let boundary = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let panel = Size::new(180.0, 80.0);
    let mut group = c.benchmark_group("solve");

    for n in [64usize, 1024] {
        let anchors = gen_interior_anchors(n, boundary);
        let placements = PlacementList::parse("top bottom");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("interior_first_fit_n{}", n), |b| {
            b.iter(|| {
                for &anchor in &anchors {
                    black_box(solve(
                        black_box(anchor),
                        panel,
                        &placements,
                        boundary,
                        Space::Boundary,
                    ));
                }
            });
        });
    }

    for n in [64usize, 1024] {
        let anchors = gen_edge_anchors(n, boundary);
        let placements = PlacementList::parse("auto");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("edge_fallback_n{}", n), |b| {
            b.iter(|| {
                for &anchor in &anchors {
                    black_box(solve(
                        black_box(anchor),
                        panel,
                        &placements,
                        boundary,
                        Space::Anchor,
                    ));
                }
            });
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("placement_list", |b| {
        b.iter(|| black_box(PlacementList::parse(black_box("top-start bottom auto left-end"))));
    });
    group.finish();
}

criterion_group!(benches, bench_solve, bench_parse);
criterion_main!(benches);
