#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use testrun_rs::select::select;
use testrun_rs::{Modifier, SkipReason, TestCase};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    tests: Vec<(String, u8)>,
    filter: Option<String>,
}

fuzz_target!(|input: FuzzInput| {
    let tests: Vec<TestCase> = input
        .tests
        .iter()
        .map(|(name, m)| {
            let modifier = match m % 3 {
                0 => Modifier::Normal,
                1 => Modifier::Skip,
                _ => Modifier::Only,
            };
            TestCase::new(name.clone(), modifier, Box::new(|| Ok(())))
        })
        .collect();

    let selection = select(&tests, input.filter.as_deref());

    // Every test is either runnable or skipped, exactly once, in order
    let mut seen: Vec<usize> = selection
        .runnable
        .iter()
        .copied()
        .chain(selection.skipped.iter().map(|(i, _)| *i))
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..tests.len()).collect::<Vec<_>>());
    assert!(selection.runnable.windows(2).all(|w| w[0] < w[1]));
    assert!(selection.skipped.windows(2).all(|w| w[0].0 < w[1].0));

    let any_only = tests.iter().any(|t| t.modifier == Modifier::Only);
    for &index in &selection.runnable {
        let test = &tests[index];
        assert_ne!(test.modifier, Modifier::Skip);
        assert!(!any_only || test.modifier == Modifier::Only);
        if let Some(filter) = &input.filter {
            assert!(test.qualified_name.contains(filter.as_str()));
        }
    }
    for &(index, reason) in &selection.skipped {
        if tests[index].modifier == Modifier::Skip {
            assert_eq!(reason, SkipReason::Explicit);
        }
    }
});
