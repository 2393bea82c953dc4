use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use campairs::{CollectingDiagnostics, PairGenerator, WindowConfig};

fn rig_names(cameras: usize, frames: usize) -> Vec<String> {
    (0..cameras)
        .flat_map(|c| (0..frames).map(move |f| format!("rig/cam{c:02}/{f:06}.jpg")))
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_pairs");
    for &(cameras, frames) in &[(2usize, 500usize), (4, 500), (6, 1000)] {
        let names = rig_names(cameras, frames);
        for loop_closure in [false, true] {
            let generator = PairGenerator::new(WindowConfig::new(5, loop_closure));
            let id = format!("{cameras}x{frames}/loop={loop_closure}");
            group.bench_with_input(BenchmarkId::from_parameter(id), &names, |b, names| {
                b.iter(|| {
                    let mut diag = CollectingDiagnostics::default();
                    black_box(generator.generate_with_diagnostics(black_box(names), &mut diag))
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
