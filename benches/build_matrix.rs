use criterion::{black_box, criterion_group, criterion_main, Criterion};
use optimal_edits::{build, matrix::final_cost, EditCosts};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize) -> Vec<char> {
    const ALPHABET: &[char] = &['a', 'b', 'c', 'd'];
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let costs = EditCosts::default();
    let mut group = c.benchmark_group("cost_matrix");
    for &len in &[100usize, 500, 1_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let x = random_text(&mut rng, len);
        let y = random_text(&mut rng, len);
        group.bench_function(format!("full_{len}"), |b| {
            b.iter(|| black_box(build(&x, &y, &costs).final_cost()))
        });
        group.bench_function(format!("rolling_{len}"), |b| {
            b.iter(|| black_box(final_cost(&x, &y, &costs)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
