use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use nanocol::Bitmask;

fn bitwise_invert(mask: &Bitmask) -> Bitmask {
    let mut out = Bitmask::new_set_all(mask.len(), false);
    for i in 0..mask.len() {
        out.set(i, !mask.get(i));
    }
    out
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitmask_invert");
    for bits in [1 << 10, 1 << 16, 1 << 22] {
        let mut mask = Bitmask::new_set_all(bits, false);
        for i in (0..bits).step_by(3) {
            mask.set(i, true);
        }

        group.bench_function(format!("word_stride/{bits}"), |b| {
            b.iter_batched(|| mask.clone(), |m| m.invert(), BatchSize::SmallInput)
        });
        group.bench_function(format!("per_bit/{bits}"), |b| {
            b.iter_batched(
                || mask.clone(),
                |m| bitwise_invert(&m),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_invert);
criterion_main!(benches);
