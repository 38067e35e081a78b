use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use sprite_atlas_core::prelude::*;
use std::hint::black_box;

fn generate_sprites(count: usize, min_size: u32, max_size: u32) -> Vec<(String, u32, u32)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(count as u64);
    (0..count)
        .map(|i| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            (format!("sprite_{}", i), w, h)
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    for count in [50, 100, 200] {
        let sprites = generate_sprites(count, 16, 64);
        group.throughput(Throughput::Elements(count as u64));

        for (name, kind) in [
            ("Frontier", PlacementStrategyKind::Frontier),
            ("QuadTree", PlacementStrategyKind::QuadTree),
        ] {
            group.bench_with_input(BenchmarkId::new(name, count), &sprites, |b, sprites| {
                b.iter(|| {
                    let cfg = PackerConfig::builder().strategy(kind).expand(1).build();
                    black_box(pack_layout(sprites.clone(), cfg))
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
