use atrium_math::Aabb;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;

fn bench_contains_point(c: &mut Criterion) {
    let room = Aabb::new(Vec3::new(12.6, 0.1, -12.5), Vec3::new(52.6, 12.6, 12.5));
    let camera = black_box(Vec3::new(30.0, 1.7, 0.0));
    c.bench_function("aabb_contains_point", |bencher| {
        bencher.iter(|| black_box(room.contains_point(camera)))
    });
}

fn bench_collider_sweep(c: &mut Criterion) {
    let colliders: Vec<Aabb> = (0..64)
        .map(|i| {
            let x = i as f32 * 2.0;
            Aabb::new(Vec3::new(x, 0.0, -0.05), Vec3::new(x + 1.5, 7.0, 0.05))
        })
        .collect();
    let player = black_box(Aabb::from_center_half_extents(
        Vec3::new(40.0, 0.85, 0.2),
        Vec3::new(0.3, 0.85, 0.3),
    ));
    c.bench_function("aabb_collider_sweep_64", |bencher| {
        bencher.iter(|| black_box(colliders.iter().any(|c| c.intersects(&player))))
    });
}

criterion_group!(benches, bench_contains_point, bench_collider_sweep);
criterion_main!(benches);
