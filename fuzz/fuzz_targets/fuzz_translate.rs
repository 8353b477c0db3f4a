#![no_main]
//! Fuzz the whole-number translation pipeline with arbitrary digit-group
//! sequences.
//!
//! Checks that translation never panics, that spoken output keeps single
//! spaces between words, and that the error partition follows the group
//! count: up to four groups compose, five to seven outrun the radix table,
//! eight or more trip the digit limit.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use numspell_core::{DigitGroup, LexemeTable, TranslateError};
use numspell_locales::vi;

#[derive(Arbitrary, Debug)]
struct TranslateInput {
    raw_groups: Vec<u16>,
}

fn whitespace_disciplined(spoken: &str) -> bool {
    !spoken.starts_with(' ') && !spoken.ends_with(' ') && !spoken.contains("  ")
}

fuzz_target!(|input: TranslateInput| {
    let groups: Vec<DigitGroup> = input
        .raw_groups
        .iter()
        .take(12)
        .map(|&raw| DigitGroup::new(raw % 1_000).unwrap())
        .collect();

    let translator = vi::translator();
    let outcome = translator.translate(&groups);

    match groups.len() {
        0..=4 => {
            let spoken = outcome.unwrap();
            assert!(whitespace_disciplined(&spoken), "ragged spacing: {spoken:?}");

            // A sequence with a value-bearing top group must read the same
            // through the value API.
            if groups.last().is_some_and(|last| !last.is_zero()) {
                let value = groups
                    .iter()
                    .rev()
                    .fold(0u128, |acc, group| acc * 1_000 + u128::from(group.value()));
                assert_eq!(translator.translate_value(value).unwrap(), spoken);
            }
        }
        5..=7 => {
            assert_eq!(
                outcome.unwrap_err(),
                TranslateError::MissingLexeme {
                    table: LexemeTable::Radix,
                    index: 4,
                }
            );
        }
        count => {
            assert_eq!(
                outcome.unwrap_err(),
                TranslateError::LengthExceeded {
                    digits: count * 3,
                    max_digits: vi::MAX_DIGITS,
                }
            );
        }
    }
});
