use blufx_core::grade::{grade_pixel, GradingUniforms};
use blufx_core::{PresetId, PresetLibrary};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};

fn bench_grade_row_1920(c: &mut Criterion) {
    let params = *PresetLibrary::new().get(PresetId::Sixties);
    let uniforms = GradingUniforms::new(&params, 1920, 1080, false);
    c.bench_function("grade_row_1920", |b| {
        b.iter(|| {
            for x in 0..1920 {
                let t = x as f32 / 1920.0;
                black_box(grade_pixel(
                    Vec3::new(t, 0.5, 1.0 - t),
                    Vec2::new(x as f32, 540.0),
                    &uniforms,
                ));
            }
        });
    });
}

fn bench_grade_split_preview(c: &mut Criterion) {
    let params = *PresetLibrary::new().get(PresetId::Monochrome);
    let uniforms = GradingUniforms::new(&params, 1920, 1080, true);
    c.bench_function("grade_split_preview_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let x = (i * 7 % 1920) as f32;
                if blufx_core::grade::is_graded(x, &uniforms) {
                    black_box(grade_pixel(Vec3::splat(0.4), Vec2::new(x, 100.0), &uniforms));
                }
            }
        });
    });
}

criterion_group!(benches, bench_grade_row_1920, bench_grade_split_preview);
criterion_main!(benches);
