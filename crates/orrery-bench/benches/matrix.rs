use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orrery_bench::*;
use orrery_la::{mat_mul, project3, rotate_x3, rotate_xw4, rotate_z4, Matrix};

fn matmul_4x4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat_mul/4x4");

    group.bench_function("orrery", |b| {
        let a = random_matrix(4, 4);
        let v = random_matrix(4, 4);
        b.iter(|| black_box(mat_mul(black_box(&a), black_box(&v))))
    });

    group.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_column_slice(4, 4, &random_f64_flat(16));
        let v = nalgebra::DMatrix::from_column_slice(4, 4, &random_f64_flat(16));
        b.iter(|| black_box(black_box(&a) * black_box(&v)))
    });

    group.finish();
}

fn rotations(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");

    group.bench_function("x3/64_points", |b| {
        let pts = random_matrix(3, 64);
        b.iter(|| black_box(rotate_x3(black_box(&pts), black_box(0.3))))
    });

    group.bench_function("xw4/64_points", |b| {
        let pts = random_matrix(4, 64);
        b.iter(|| black_box(rotate_xw4(black_box(&pts), black_box(0.3))))
    });

    group.finish();
}

fn tesseract_frame(c: &mut Criterion) {
    // 16 vertices of a hypercube, two rotations, projected to 3D
    let verts = Matrix::from_fn(4, 16, |i, j| if (j >> i) & 1 == 1 { 1.0 } else { -1.0 });
    c.bench_function("pipeline/tesseract_frame", |b| {
        b.iter(|| {
            let r = rotate_xw4(black_box(&verts), 0.01).and_then(|r| rotate_z4(&r, 0.02));
            black_box(r.and_then(|r| mat_mul(&project3(1.0), &r)))
        })
    });
}

criterion_group!(benches, matmul_4x4, rotations, tesseract_frame);
criterion_main!(benches);
