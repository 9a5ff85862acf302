// benches/generator_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geometric_shapes::{
    sample_cubic_bezier, sample_quadratic_bezier, Point2, SceneConfig, ShapeGenerator, ShapeScene,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sampler_benchmark_fn(c: &mut Criterion) {
    let mut group = c.benchmark_group("BezierSamplers");

    group.bench_function("cubic_41_points", |b| {
        b.iter(|| {
            sample_cubic_bezier(
                black_box(Point2::ZERO),
                black_box(Point2::new(41.0, 0.3)),
                black_box(Point2::new(0.0, 0.95)),
                black_box(Point2::new(41.0, 1.0)),
                black_box(41),
            )
        })
    });

    group.bench_function("quadratic_21_points", |b| {
        b.iter(|| {
            sample_quadratic_bezier(
                black_box(Point2::ZERO),
                black_box(Point2::new(42.0, 0.05)),
                black_box(Point2::new(21.0, 1.0)),
                black_box(21),
            )
        })
    });
    group.finish();
}

fn outline_benchmark_fn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2018);
    let mut group = c.benchmark_group("ShapeGeneration");

    group.bench_function("random_outline", |b| {
        b.iter(|| ShapeGenerator::random_outline(black_box(&mut rng)))
    });

    group.bench_function("recycle_one_shape", |b| {
        let config = SceneConfig::default();
        let origin = config.origin_for_view(375.0, 667.0);
        let mut scene = ShapeScene::new(config, StdRng::seed_from_u64(7), origin).unwrap();
        scene.run().unwrap();
        b.iter(|| {
            let id = scene.instances()[0].id;
            scene.on_motion_complete(black_box(id)).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, sampler_benchmark_fn, outline_benchmark_fn);
criterion_main!(benches);
