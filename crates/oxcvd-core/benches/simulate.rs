//! Simulation benchmarks
//!
//! Compares the per-pixel cost of the three algorithms and the full
//! sRGB facade.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxcvd_core::{Brettel1997, Deficiency, LinearImage, Machado2009, Simulator, SrgbImage, Vienot1999};

/// Generate a deterministic linear RGB test image
fn generate_linear_image(width: usize, height: usize) -> LinearImage {
    let samples = (0..width * height)
        .map(|i| {
            let t = i as f32 / (width * height) as f32;
            [t, (t * 2.0) % 1.0, (t * 3.0) % 1.0]
        })
        .collect();
    LinearImage::from_samples(width, height, samples).unwrap()
}

fn generate_srgb_image(width: usize, height: usize) -> SrgbImage {
    let data = (0..width * height * 3)
        .map(|i| ((i * 37) % 256) as u8)
        .collect();
    SrgbImage::from_raw(width, height, data).unwrap()
}

fn bench_simulators_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_linear");

    let simulators: [(&str, Simulator); 3] = [
        ("vienot1999", Vienot1999::with_default_model().unwrap().into()),
        ("brettel1997", Brettel1997::with_default_model().unwrap().into()),
        ("machado2009", Machado2009::new().into()),
    ];

    for size in [64usize, 256] {
        let image = generate_linear_image(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));

        for (name, simulator) in &simulators {
            group.bench_with_input(
                BenchmarkId::new(*name, size),
                &image,
                |b, image| {
                    b.iter(|| {
                        simulator
                            .simulate_linear(black_box(image), Deficiency::Protan, 1.0)
                            .unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_srgb_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_srgb");

    let simulator = Simulator::auto().unwrap();
    for size in [64usize, 256] {
        let image = generate_srgb_image(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("auto", size), &image, |b, image| {
            b.iter(|| {
                simulator
                    .simulate_srgb(black_box(image), Deficiency::Deutan, 1.0)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulators_linear, bench_srgb_facade);
criterion_main!(benches);
