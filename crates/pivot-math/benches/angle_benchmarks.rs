use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use pivot_math::*;

fn bench_lerp_angle(c: &mut Criterion) {
    let a = black_box(350.0_f32);
    let b = black_box(10.0_f32);
    c.bench_function("lerp_angle", |bencher| {
        bencher.iter(|| black_box(lerp_angle(a, b, 0.18)))
    });
}

fn bench_delta_angle(c: &mut Criterion) {
    let a = black_box(-725.0_f32);
    let b = black_box(1_080.5_f32);
    c.bench_function("delta_angle", |bencher| {
        bencher.iter(|| black_box(delta_angle(a, b)))
    });
}

fn bench_yaw_pitch_rotation(c: &mut Criterion) {
    let yaw = black_box(123.0_f32);
    let pitch = black_box(-35.0_f32);
    c.bench_function("yaw_pitch_rotation", |bencher| {
        bencher.iter(|| black_box(yaw_pitch_rotation(yaw, pitch)))
    });
}

fn bench_euler_roundtrip(c: &mut Criterion) {
    let e = black_box(Vec3::new(12.0, 250.0, 3.0));
    c.bench_function("euler_roundtrip", |bencher| {
        bencher.iter(|| black_box(euler_degrees(from_euler_degrees(e))))
    });
}

criterion_group!(
    benches,
    bench_lerp_angle,
    bench_delta_angle,
    bench_yaw_pitch_rotation,
    bench_euler_roundtrip
);
criterion_main!(benches);
