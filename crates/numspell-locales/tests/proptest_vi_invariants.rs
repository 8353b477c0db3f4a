//! Property-based invariant tests for the Vietnamese tables.
//!
//! Verifies locale-level guarantees on top of the engine invariants:
//!
//! 1. Every value through 12 digits translates, with disciplined whitespace
//! 2. Translation is deterministic
//! 3. The zero word appears exactly for zero
//! 4. Every spoken token comes from the Vietnamese tables
//! 5. Values of 13..=21 digits fail on the radix table, 22 and up on the
//!    length gate
//! 6. Pre-split group sequences of 1..=4 groups always translate
//! 7. Tag resolution never panics and only ever yields Vietnamese

use std::collections::HashSet;

use numspell_core::{DigitGroup, LexemeTable, TranslateError};
use numspell_locales::{Locale, vi};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

/// Largest value whose groups all have radix words: 12 digits.
const MAX_COVERED: u128 = 999_999_999_999;

/// Smallest value rejected by the 21-digit length gate: 22 digits.
const MIN_OVERSIZED: u128 = 1_000_000_000_000_000_000_000;

fn vi_token_set() -> HashSet<&'static str> {
    let dict = vi::DICTIONARY;
    let mut tokens: HashSet<&'static str> = HashSet::new();
    for table in [dict.ones, dict.linking_ones, dict.teens, dict.tens, dict.radix] {
        for word in table {
            tokens.extend(word.split_whitespace());
        }
    }
    tokens.insert(dict.zero);
    tokens.insert(dict.hundred);
    tokens.extend(dict.delimiters[1].split_whitespace());
    tokens
}

fn whitespace_disciplined(text: &str) -> bool {
    !text.starts_with(' ') && !text.ends_with(' ') && !text.contains("  ")
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Every value through 12 digits translates
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn covered_values_always_translate(value in 0..=MAX_COVERED) {
        let spoken = vi::translator().translate_value(value);
        let spoken = spoken.expect("12-digit coverage");
        prop_assert!(!spoken.is_empty(), "silent output for {}", value);
        prop_assert!(
            whitespace_disciplined(&spoken),
            "malformed whitespace in {:?} for {}",
            spoken, value
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Translation is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translation_is_deterministic(value in 0..=MAX_COVERED) {
        let translator = vi::translator();
        prop_assert_eq!(
            translator.translate_value(value),
            translator.translate_value(value)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. The zero word appears exactly for zero
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn only_zero_speaks_khong(value in 0..=MAX_COVERED) {
        let spoken = vi::translator().translate_value(value).unwrap();
        if value == 0 {
            prop_assert_eq!(spoken, "không");
        } else {
            prop_assert!(
                !spoken.split(' ').any(|token| token == "không"),
                "zero word leaked into {:?} for {}",
                spoken, value
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Every spoken token comes from the Vietnamese tables
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn output_tokens_come_from_the_tables(value in 0..=MAX_COVERED) {
        let tokens = vi_token_set();
        let spoken = vi::translator().translate_value(value).unwrap();
        for token in spoken.split(' ').filter(|t| !t.is_empty()) {
            prop_assert!(
                tokens.contains(token),
                "token {:?} not in the tables (value {})",
                token, value
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Digit-count error partition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn values_past_the_radix_table_report_the_gap(
        value in (MAX_COVERED + 1)..MIN_OVERSIZED
    ) {
        let err = vi::translator().translate_value(value).unwrap_err();
        prop_assert_eq!(
            err,
            TranslateError::MissingLexeme { table: LexemeTable::Radix, index: 4 },
            "unexpected error for {}", value
        );
    }

    #[test]
    fn oversized_values_hit_the_length_gate(value in MIN_OVERSIZED..=u128::MAX) {
        let err = vi::translator().translate_value(value).unwrap_err();
        prop_assert!(
            matches!(err, TranslateError::LengthExceeded { max_digits: 21, .. }),
            "unexpected error {:?} for {}",
            err, value
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Pre-split group sequences of 1..=4 groups always translate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn in_range_group_sequences_translate(
        values in prop::collection::vec(0u16..=999, 1..=4)
    ) {
        let groups: Vec<DigitGroup> = values
            .iter()
            .map(|&v| DigitGroup::new(v).unwrap())
            .collect();
        let spoken = vi::translator().translate(&groups);
        prop_assert!(spoken.is_ok(), "unexpected error {:?} for {:?}", spoken, values);
        prop_assert!(whitespace_disciplined(&spoken.unwrap()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Tag resolution never panics and only ever yields Vietnamese
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tag_resolution_is_total(tag in "\\PC{0,16}") {
        if let Some(locale) = Locale::from_tag(&tag) {
            prop_assert_eq!(locale, Locale::ViVn);
        }
    }
}
