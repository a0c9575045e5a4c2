//! Benchmarks for one animation frame on the CPU.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use neurofield::{FieldConfig, ParticleField, Recorder};

/// Surface sizes and the particle counts they produce.
const SIZES: [(f32, f32); 3] = [(800.0, 600.0), (1500.0, 1000.0), (2560.0, 1440.0)];

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for (width, height) in SIZES {
        let mut field = ParticleField::new(width, height, FieldConfig::default(), 1);
        field.set_pointer(Vec2::new(width / 2.0, height / 2.0));
        group.bench_with_input(BenchmarkId::from_parameter(field.len()), &(), |b, _| {
            b.iter(|| {
                field.tick();
                black_box(field.particles());
            })
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for (width, height) in SIZES {
        let field = ParticleField::new(width, height, FieldConfig::default(), 1);
        let mut surface = Recorder::new();
        group.bench_with_input(BenchmarkId::from_parameter(field.len()), &(), |b, _| {
            b.iter(|| {
                field.render(&mut surface);
                black_box(surface.take());
            })
        });
    }

    group.finish();
}

fn bench_edges(c: &mut Criterion) {
    let field = ParticleField::new(2560.0, 1440.0, FieldConfig::default(), 1);
    c.bench_function("edges_max_particles", |b| {
        b.iter(|| black_box(field.edges().count()))
    });
}

criterion_group!(benches, bench_tick, bench_render, bench_edges);
criterion_main!(benches);
