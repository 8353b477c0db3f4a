#![no_main]
//! Fuzz base-1000 tokenization with arbitrary 128-bit values.
//!
//! Checks that every value yields at least one group, that the most
//! significant group is only zero for the value zero, and that the groups
//! fold back to the original value.

use libfuzzer_sys::fuzz_target;
use numspell_core::{DigitGroup, tokenize};

fuzz_target!(|value: u128| {
    let groups = tokenize(value);

    assert!(!groups.is_empty());
    // 1000^13 already exceeds u128::MAX.
    assert!(groups.len() <= 13, "{value} split into {} groups", groups.len());

    if value == 0 {
        assert_eq!(groups, [DigitGroup::ZERO]);
    } else {
        assert!(
            groups.last().is_some_and(|last| !last.is_zero()),
            "leading zero group on {value}"
        );
    }

    let rebuilt = groups
        .iter()
        .rev()
        .fold(0u128, |acc, group| acc * 1_000 + u128::from(group.value()));
    assert_eq!(rebuilt, value);
});
