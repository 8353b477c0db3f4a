//! Whole-number orchestration: length validation and the zero special case
//! up front, then one composed phrase per group, joined most significant
//! first.

use crate::compose::{compose, join_non_empty};
use crate::dictionary::Dictionary;
use crate::error::{Result, TranslateError};
use crate::group::{DigitGroup, GROUP_DIGITS, tokenize};

/// Renders digit-group sequences as spoken words against one locale
/// dictionary.
///
/// Holds only immutable configuration, so it is `Copy` and freely
/// shareable across threads.
///
/// # Examples
///
/// ```
/// use numspell_core::{Dictionary, DigitGroup, Translator};
///
/// const ENGLISH: Dictionary = Dictionary {
///     zero: "zero",
///     ones: &["", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"],
///     linking_ones: &["", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"],
///     teens: &[
///         "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
///         "eighteen", "nineteen",
///     ],
///     tens: &[
///         "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
///     ],
///     hundred: "hundred",
///     radix: &["", "thousand", "million", "billion"],
///     delimiters: &[" ", "and"],
/// };
///
/// let translator = Translator::new(ENGLISH, 21);
/// assert_eq!(translator.translate_value(0)?, "zero");
/// assert_eq!(translator.translate_value(1_005)?, "one thousand and five");
///
/// let groups = [DigitGroup::new(15).unwrap()];
/// assert_eq!(translator.translate(&groups)?, "fifteen");
/// # Ok::<(), numspell_core::TranslateError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    dict: Dictionary,
    max_digits: usize,
}

impl Translator {
    /// New translator over `dict`, accepting at most `max_digits` total
    /// decimal digits per call.
    #[must_use]
    pub const fn new(dict: Dictionary, max_digits: usize) -> Self {
        Self { dict, max_digits }
    }

    /// The dictionary this translator reads.
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// The configured digit limit.
    #[must_use]
    pub const fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Renders a least-significant-first group sequence as words.
    ///
    /// # Errors
    ///
    /// [`TranslateError::LengthExceeded`] when the sequence implies more
    /// digits than the configured maximum, checked before any composition;
    /// [`TranslateError::MissingLexeme`] when the dictionary lacks an
    /// entry the composition needs.
    pub fn translate(&self, groups: &[DigitGroup]) -> Result<String> {
        let digits = groups.len() * GROUP_DIGITS;
        if digits > self.max_digits {
            tracing::debug!(
                digits,
                max_digits = self.max_digits,
                "rejecting oversized digit-group sequence"
            );
            return Err(TranslateError::LengthExceeded {
                digits,
                max_digits: self.max_digits,
            });
        }

        if let [only] = groups {
            if only.is_zero() {
                return Ok(self.dict.zero.to_string());
            }
        }

        let total_groups = groups.len();
        let mut phrases = Vec::with_capacity(total_groups);
        for (position, &group) in groups.iter().enumerate() {
            phrases.push(compose(&self.dict, group, position, total_groups)?);
        }
        // Most significant group speaks first.
        phrases.reverse();

        let separator = self.dict.separator()?;
        Ok(join_non_empty(
            phrases.iter().map(String::as_str),
            separator,
        ))
    }

    /// Tokenizes `value` into groups and renders it as words.
    ///
    /// # Errors
    ///
    /// Same as [`Translator::translate`].
    pub fn translate_value(&self, value: u128) -> Result<String> {
        self.translate(&tokenize(value))
    }
}
