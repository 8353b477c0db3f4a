#![forbid(unsafe_code)]

//! Built-in locale word tables for numspell.
//!
//! Each locale module exposes its tables as `const` data plus a ready
//! [`Translator`] factory; the [`Locale`] enum is the registry layer that
//! resolves IETF-style tags to those tables.
//!
//! # Role in numspell
//! `numspell-core` defines the dictionary contract but never hardcodes a
//! language; this crate carries the language data. Adding a locale means
//! adding a module with its tables and wiring one `Locale` variant, with
//! no engine changes.

use std::fmt;

use numspell_core::{Dictionary, Translator};

pub mod vi;

/// Built-in locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Vietnamese (Vietnam), tag `vi-VN`.
    ViVn,
}

impl Locale {
    /// Every built-in locale.
    pub const ALL: &'static [Locale] = &[Locale::ViVn];

    /// Resolves an IETF-style language tag.
    ///
    /// Matching is case-insensitive and treats `-` and `_` alike, so
    /// `"vi"`, `"vi-VN"`, and `"vi_vn"` all resolve. Unknown tags are
    /// `None`; a number spoken in the wrong language is worse than no
    /// rendering, so there is no fallback locale.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "vi" | "vi-vn" => Some(Self::ViVn),
            _ => None,
        }
    }

    /// Canonical tag for this locale.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ViVn => "vi-VN",
        }
    }

    /// The locale's word tables.
    #[must_use]
    pub const fn dictionary(self) -> Dictionary {
        match self {
            Self::ViVn => vi::DICTIONARY,
        }
    }

    /// The locale's accepted digit count.
    #[must_use]
    pub const fn max_digits(self) -> usize {
        match self {
            Self::ViVn => vi::MAX_DIGITS,
        }
    }

    /// A translator configured for this locale.
    #[must_use]
    pub fn translator(self) -> Translator {
        Translator::new(self.dictionary(), self.max_digits())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
