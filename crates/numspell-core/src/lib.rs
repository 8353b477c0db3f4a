#![forbid(unsafe_code)]

//! Core composition engine for numspell: digit groups to spoken words.
//!
//! # Role in numspell
//! `numspell-core` owns the whole algorithm: the digit-group data model,
//! the locale dictionary contract, the per-group trio composer, and the
//! translator that orchestrates them over a whole number. Locale word
//! tables live in `numspell-locales`; this crate never hardcodes a
//! language.
//!
//! # Primary responsibilities
//! - **DigitGroup / tokenize**: base-1000 decomposition of an integer.
//! - **Dictionary**: the immutable word-table contract locale data fulfills.
//! - **compose**: one digit group plus its position to one word phrase.
//! - **Translator**: whole-number validation and phrase joining.
//!
//! # How it fits in the system
//! `numspell-locales` supplies [`Dictionary`] values; the `numspell` facade
//! re-exports both crates. Everything here is pure and synchronous: a
//! dictionary is `'static` data, a [`Translator`] is `Copy`, and
//! translation output depends only on the input groups.

pub mod compose;
pub mod dictionary;
pub mod error;
pub mod group;
pub mod translator;

pub use compose::compose;
pub use dictionary::Dictionary;
pub use error::{LexemeTable, Result, TranslateError};
pub use group::{DigitGroup, GROUP_DIGITS, InvalidDigitGroup, tokenize};
pub use translator::Translator;
