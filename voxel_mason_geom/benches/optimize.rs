use criterion::{Criterion, black_box, criterion_group, criterion_main};
use voxel_mason_geom::shape::SphereParams;
use voxel_mason_geom::{GeometryConfig, Shape, VoxelCoord, generate, optimize};

fn sphere(radius: f64, hollow: bool) -> Vec<VoxelCoord> {
    let shape = Shape::Sphere(SphereParams {
        center: VoxelCoord::new(0, 64, 0),
        radius,
        hollow,
    });
    generate(&shape, &GeometryConfig::default()).unwrap()
}

fn bench_generate_solid_sphere_r24(c: &mut Criterion) {
    let shape = Shape::Sphere(SphereParams {
        center: VoxelCoord::new(0, 64, 0),
        radius: 24.0,
        hollow: false,
    });
    let config = GeometryConfig::default();
    c.bench_function("generate_solid_sphere_r24", |b| {
        b.iter(|| generate(black_box(&shape), &config))
    });
}

fn bench_optimize_solid_sphere_r24(c: &mut Criterion) {
    let points = sphere(24.0, false);
    c.bench_function("optimize_solid_sphere_r24", |b| {
        b.iter(|| optimize(black_box(&points)))
    });
}

fn bench_optimize_hollow_sphere_r24(c: &mut Criterion) {
    let points = sphere(24.0, true);
    c.bench_function("optimize_hollow_sphere_r24", |b| {
        b.iter(|| optimize(black_box(&points)))
    });
}

criterion_group!(
    benches,
    bench_generate_solid_sphere_r24,
    bench_optimize_solid_sphere_r24,
    bench_optimize_hollow_sphere_r24,
);
criterion_main!(benches);
