//! Error model for the composition engine.
//!
//! Two failure modes, both returned as values (no panics anywhere in the
//! engine):
//!
//! 1. **Oversized input**: the caller handed in more digits than the locale
//!    accepts. Checked up front, before any dictionary access.
//! 2. **Missing lexeme**: a dictionary table has no entry at a requested
//!    index. This is a malformed locale table, not an environment fault;
//!    the error names the table and the index so the table author can fix
//!    the data.

use std::fmt;

// ── Lexeme tables ───────────────────────────────────────────────────────

/// Names one word table of a [`Dictionary`](crate::Dictionary), for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexemeTable {
    /// Plain single-digit words (index 0 empty).
    Ones,
    /// Linking single-digit variants (index 0 empty).
    LinkingOnes,
    /// Irregular forms for 10..=19, indexed by units digit.
    Teens,
    /// Tens words for digits 2..=9 (indices 0..=1 unused).
    Tens,
    /// Place-value words, indexed by group position (index 0 empty).
    Radix,
    /// Connector tokens: plain separator, then the zero bridge.
    Delimiters,
}

impl LexemeTable {
    /// Stable lowercase label, used in error text and tracing fields.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ones => "ones",
            Self::LinkingOnes => "linking_ones",
            Self::Teens => "teens",
            Self::Tens => "tens",
            Self::Radix => "radix",
            Self::Delimiters => "delimiters",
        }
    }
}

impl fmt::Display for LexemeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Translation errors ──────────────────────────────────────────────────

/// Why a translation request was refused.
///
/// Translation either fully succeeds or fails before producing output;
/// there are no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateError {
    /// The input carries more decimal digits than the locale accepts.
    ///
    /// Raised from the digit-count precondition, never mid-composition.
    LengthExceeded {
        /// Total digits implied by the supplied group count.
        digits: usize,
        /// The locale's configured maximum.
        max_digits: usize,
    },
    /// A dictionary table has no entry at the requested index.
    ///
    /// Indicates a malformed locale table; well-formed dictionaries never
    /// trigger this.
    MissingLexeme {
        /// Which table was consulted.
        table: LexemeTable,
        /// The index that had no entry.
        index: usize,
    },
}

/// Standard result type for engine APIs.
pub type Result<T> = std::result::Result<T, TranslateError>;

impl TranslateError {
    /// Error kind label for tracing fields and metrics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LengthExceeded { .. } => "length_exceeded",
            Self::MissingLexeme { .. } => "missing_lexeme",
        }
    }

    /// Whether this error is an input-contract violation by the caller
    /// (as opposed to a malformed dictionary).
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::LengthExceeded { .. })
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthExceeded { digits, max_digits } => {
                write!(f, "number has {digits} digits, locale accepts at most {max_digits}")
            }
            Self::MissingLexeme { table, index } => {
                write!(f, "dictionary table '{table}' has no entry at index {index}")
            }
        }
    }
}

impl std::error::Error for TranslateError {}
