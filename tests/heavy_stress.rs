#![cfg(feature = "heavy")]
use optimal_edits::matrix::final_cost;
use optimal_edits::{build, EditCosts, EnumeratorBuilder};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<char> {
    const ALPHABET: &[char] = &['A', 'C', 'G', 'T'];
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn heavy_full_matrix_agrees_with_rolling_rows() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 2_000);
    let t = random_dna(&mut rng, 2_000);
    let costs = EditCosts::default();
    let matrix = build(&s, &t, &costs);
    assert_eq!(matrix.final_cost(), final_cost(&s, &t, &costs));
}

#[test]
fn heavy_deep_enumeration_does_not_overflow_stack() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = random_dna(&mut rng, 3_000);
    let t = random_dna(&mut rng, 3_000);
    let costs = EditCosts::default();
    let matrix = build(&s, &t, &costs);
    let found = EnumeratorBuilder::new(&s, &t, &matrix, &costs)
        .with_limit(16)
        .build()
        .run();
    assert!(!found.is_empty());
    for seq in &found.sequences {
        assert_eq!(seq.total_cost(&s, &t, &costs), matrix.final_cost());
        assert_eq!(seq.apply(&s, &t).as_ref(), Some(&t));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn heavy_parallel_search_on_long_inputs() {
    let mut rng = StdRng::seed_from_u64(11);
    let s = random_dna(&mut rng, 3_000);
    let costs = EditCosts::default();

    // A single copy-only path of 3,000 steps.
    let matrix = build(&s, &s, &costs);
    let found = EnumeratorBuilder::new(&s, &s, &matrix, &costs)
        .build()
        .run_parallel();
    assert_eq!(found.len(), 1);
    assert_eq!(found.sequences[0].len(), s.len() + 1);

    let t = random_dna(&mut rng, 3_000);
    let matrix = build(&s, &t, &costs);
    let enumerator = EnumeratorBuilder::new(&s, &t, &matrix, &costs)
        .with_limit(16)
        .build();
    assert_eq!(enumerator.run_parallel(), enumerator.run());
}
