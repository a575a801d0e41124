use criterion::{Criterion, criterion_group, criterion_main};
use pawmatch_core::*;
use std::hint::black_box;

fn catalog(size: u16) -> Catalog {
    Catalog::new(
        (0..size)
            .map(|i| Symbol::new(format!("symbol_{i}"), format!("{i}.png")))
            .collect(),
    )
    .unwrap()
}

fn bench_deal(c: &mut Criterion) {
    let mut group = c.benchmark_group("deal");
    for size in [9, 64, 1024] {
        let catalog = catalog(size);
        group.bench_function(format!("pairs_{size}"), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomDeckGenerator::new(seed).generate(black_box(&catalog)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_deal);
criterion_main!(benches);
