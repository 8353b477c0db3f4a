//! Locale dictionary contract: the word tables the composer reads.
//!
//! A [`Dictionary`] is a pure data record. Locale crates build one as
//! `const` data and hand it to a [`Translator`](crate::Translator); the
//! engine reads the single-word fields directly and every indexed table
//! through the typed accessors below.
//!
//! # Invariants
//!
//! - Tables are total over their declared domains: `ones`, `linking_ones`,
//!   and `teens` cover indices 0..=9 (index 0 of the ones tables is the
//!   empty string), `tens` covers 2..=9 with empty placeholders at 0..=1,
//!   `radix` has an empty entry at position 0, `delimiters` holds the
//!   plain separator then the bridge.
//! - `tens[0]` and `tens[1]` are never consulted: a tens digit of 1 routes
//!   to `teens` and a tens digit of 0 to the plain units word.
//! - A dictionary is never mutated after construction; sharing one across
//!   threads is safe.
//!
//! # Failure modes
//!
//! | Condition | Result |
//! |-----------|--------|
//! | Table shorter than a requested index | [`TranslateError::MissingLexeme`] |
//! | Empty word where a digit expects one | malformed output, not detectable here |

use crate::error::{LexemeTable, Result, TranslateError};

const DELIMITER_SEPARATOR: usize = 0;
const DELIMITER_BRIDGE: usize = 1;

/// Immutable word tables for one locale.
///
/// All fields are `'static` so locale tables can live in `const` items.
/// Indexed tables are slices rather than fixed arrays: a table that is too
/// short surfaces as [`TranslateError::MissingLexeme`] at lookup time
/// instead of failing to construct, which keeps the record usable for
/// partial fixtures in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary {
    /// Word for a whole-number zero (the single-group special case).
    pub zero: &'static str,
    /// Plain single-digit words; index 0 is the empty string.
    pub ones: &'static [&'static str],
    /// Linking variants of the single-digit words; index 0 is empty.
    /// Locales without vowel alternation repeat `ones` here.
    pub linking_ones: &'static [&'static str],
    /// Words for 10..=19, indexed by units digit.
    pub teens: &'static [&'static str],
    /// Words for tens digits 2..=9; indices 0..=1 are unused placeholders.
    pub tens: &'static [&'static str],
    /// The hundred word.
    pub hundred: &'static str,
    /// Place-value words by group position; index 0 is the empty string.
    pub radix: &'static [&'static str],
    /// Connector tokens: the plain separator, then the zero bridge.
    pub delimiters: &'static [&'static str],
}

impl Dictionary {
    /// Plain word for a single digit.
    pub fn one(&self, digit: u8) -> Result<&'static str> {
        lookup(self.ones, LexemeTable::Ones, digit as usize)
    }

    /// Linking variant of a single digit, used before a following spoken
    /// token where the locale alternates word forms.
    pub fn linking_one(&self, digit: u8) -> Result<&'static str> {
        lookup(self.linking_ones, LexemeTable::LinkingOnes, digit as usize)
    }

    /// Irregular word for 10..=19, by units digit.
    pub fn teen(&self, digit: u8) -> Result<&'static str> {
        lookup(self.teens, LexemeTable::Teens, digit as usize)
    }

    /// Word for a tens digit of 2..=9.
    pub fn ten(&self, digit: u8) -> Result<&'static str> {
        lookup(self.tens, LexemeTable::Tens, digit as usize)
    }

    /// Place-value word for a group position (1 = thousands group).
    pub fn radix(&self, position: usize) -> Result<&'static str> {
        lookup(self.radix, LexemeTable::Radix, position)
    }

    /// Separator placed between group phrases.
    pub fn separator(&self) -> Result<&'static str> {
        lookup(self.delimiters, LexemeTable::Delimiters, DELIMITER_SEPARATOR)
    }

    /// Connector spoken for an implicit zero in a lower place value.
    pub fn bridge(&self) -> Result<&'static str> {
        lookup(self.delimiters, LexemeTable::Delimiters, DELIMITER_BRIDGE)
    }
}

fn lookup(
    table: &'static [&'static str],
    name: LexemeTable,
    index: usize,
) -> Result<&'static str> {
    table
        .get(index)
        .copied()
        .ok_or(TranslateError::MissingLexeme { table: name, index })
}
