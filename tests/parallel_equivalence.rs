#![cfg(feature = "parallel")]

use optimal_edits::{build, Cost, EditCosts, EnumeratorBuilder};
use proptest::prelude::*;

fn costs_strategy() -> impl Strategy<Value = EditCosts> {
    (0u64..=10, 0u64..=10, 0u64..=20).prop_map(|(i, d, c)| {
        EditCosts::new(
            Cost::from_tenths(i),
            Cost::from_tenths(d),
            Cost::from_tenths(c),
        )
    })
}

proptest! {
    #[test]
    fn parallel_matches_sequential(a in "[ab]{0,6}", b in "[ab]{0,6}", costs in costs_strategy()) {
        let x: Vec<char> = a.chars().collect();
        let y: Vec<char> = b.chars().collect();
        let matrix = build(&x, &y, &costs);
        let enumerator = EnumeratorBuilder::new(&x, &y, &matrix, &costs).build();
        prop_assert_eq!(enumerator.run_parallel(), enumerator.run());
    }

    #[test]
    fn parallel_respects_limit(a in "[ab]{0,5}", b in "[ab]{0,5}", limit in 0usize..8) {
        let x: Vec<char> = a.chars().collect();
        let y: Vec<char> = b.chars().collect();
        let costs = EditCosts::from_f64(1.0, 1.0, 2.0).unwrap();
        let matrix = build(&x, &y, &costs);
        let enumerator = EnumeratorBuilder::new(&x, &y, &matrix, &costs)
            .with_limit(limit)
            .build();
        let parallel = enumerator.run_parallel();
        prop_assert!(parallel.len() <= limit);
        prop_assert_eq!(parallel, enumerator.run());
    }
}

#[test]
fn parallel_handles_wide_ties() {
    let x: Vec<char> = "abcdefg".chars().collect();
    let y: Vec<char> = "hijklmn".chars().collect();
    let costs = EditCosts::from_f64(1.0, 1.0, 2.0).unwrap();
    let matrix = build(&x, &y, &costs);
    let enumerator = EnumeratorBuilder::new(&x, &y, &matrix, &costs).build();
    let found = enumerator.run_parallel();
    // Central Delannoy number D(7, 7).
    assert_eq!(found.len(), 48_639);
    assert!(!found.truncated);
}

#[test]
fn capped_parallel_run_stops_early() {
    // Every one of the ~2.5e8 monotone paths is optimal here; only a search
    // that stops at the cap can finish.
    let x: Vec<char> = "abcdefghijkl".chars().collect();
    let y: Vec<char> = "mnopqrstuvwx".chars().collect();
    let costs = EditCosts::from_f64(1.0, 1.0, 2.0).unwrap();
    let matrix = build(&x, &y, &costs);
    for limit in [0, 1, 5, 200] {
        let enumerator = EnumeratorBuilder::new(&x, &y, &matrix, &costs)
            .with_limit(limit)
            .build();
        let parallel = enumerator.run_parallel();
        assert_eq!(parallel.len(), limit);
        assert!(parallel.truncated);
        assert_eq!(parallel, enumerator.run());
    }
}
