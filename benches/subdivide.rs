//! Benchmarks for Catmull-Clark subdivision.

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use tessel::algo::subdivide::catmull_clark_subdivide;
use tessel::prelude::*;

/// A closed quad mesh: a planar grid with wraparound connectivity.
fn create_torus_mesh(n: usize) -> QuadMesh {
    let mut points = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            points.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    let mut faces = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            let i1 = (i + 1) % n;
            let j1 = (j + 1) % n;
            faces.push([j * n + i, j * n + i1, j1 * n + i1, j1 * n + i]);
        }
    }

    QuadMesh::new(points, faces).unwrap()
}

fn bench_edge_extraction(c: &mut Criterion) {
    let mesh = create_torus_mesh(64);

    c.bench_function("extract_edges_torus_64x64", |b| {
        b.iter(|| extract_edges(&mesh).unwrap());
    });
}

fn bench_subdivision(c: &mut Criterion) {
    let small = create_torus_mesh(16);
    let large = create_torus_mesh(64);

    c.bench_function("catmull_clark_torus_16x16", |b| {
        b.iter(|| catmull_clark_subdivide(&small).unwrap());
    });

    c.bench_function("catmull_clark_torus_64x64", |b| {
        b.iter(|| catmull_clark_subdivide(&large).unwrap());
    });
}

criterion_group!(benches, bench_edge_extraction, bench_subdivision);
criterion_main!(benches);
