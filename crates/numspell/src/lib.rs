#![forbid(unsafe_code)]

//! numspell public facade crate.
//!
//! Re-exports the composition engine from `numspell-core` and the locale
//! word tables from `numspell-locales`, and adds [`to_words`], the one-call
//! path for spelling out a machine integer.
//!
//! ```
//! use numspell::{Locale, to_words};
//!
//! # fn main() -> numspell::Result<()> {
//! assert_eq!(to_words(1_015, Locale::ViVn)?, "một nghìn mười lăm");
//! assert_eq!(to_words(0, Locale::ViVn)?, "không");
//! # Ok(())
//! # }
//! ```
//!
//! Callers that need more control can build a [`Translator`] directly, or
//! pre-split a number into [`DigitGroup`]s with [`tokenize`] and drive
//! [`Translator::translate`] themselves.

// --- Engine re-exports ------------------------------------------------------

pub use numspell_core::{
    Dictionary, DigitGroup, GROUP_DIGITS, InvalidDigitGroup, LexemeTable, Result, TranslateError,
    Translator, compose, tokenize,
};

// --- Locale re-exports ------------------------------------------------------

pub use numspell_locales::{Locale, vi};

// --- Convenience ------------------------------------------------------------

/// Spell out `value` in the given locale.
///
/// Builds the locale's [`Translator`] and runs the full pipeline: the value
/// is split into base-1000 digit groups, each group is composed into a
/// phrase, and the phrases are joined most significant first.
///
/// # Errors
///
/// Returns [`TranslateError::LengthExceeded`] when `value` has more digits
/// than the locale accepts, and [`TranslateError::MissingLexeme`] when the
/// locale's dictionary has no word for something the composition needs.
///
/// ```
/// use numspell::{Locale, TranslateError, to_words};
///
/// assert_eq!(to_words(21, Locale::ViVn).as_deref(), Ok("hai mươi mốt"));
///
/// let err = to_words(10u128.pow(21), Locale::ViVn).unwrap_err();
/// assert!(matches!(err, TranslateError::LengthExceeded { .. }));
/// ```
pub fn to_words(value: u128, locale: Locale) -> Result<String> {
    locale.translator().translate_value(value)
}

// --- Prelude ----------------------------------------------------------------

/// Convenience imports for typical callers.
///
/// ```
/// use numspell::prelude::*;
///
/// assert_eq!(to_words(101, Locale::ViVn).as_deref(), Ok("một trăm lẻ một"));
/// ```
pub mod prelude {
    pub use crate::{DigitGroup, Locale, Result, TranslateError, Translator, to_words, tokenize};

    pub use crate::{core, locales};
}

pub use numspell_core as core;
pub use numspell_locales as locales;
