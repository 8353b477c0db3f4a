//! Vietnamese (vi-VN) word tables.
//!
//! The tables carry the full set of Vietnamese irregularities: teen forms
//! built on "mười", the linking unit variants "mốt" and "lăm" spoken after
//! a tens word, the "lẻ" bridge for implicit zeros, and radix words
//! through the billions group ("tỷ"). Inputs up to [`MAX_DIGITS`] digits
//! pass the length gate; the radix table covers values through 12 digits.

use numspell_core::{Dictionary, Translator};

/// Accepted digit count for Vietnamese input.
pub const MAX_DIGITS: usize = 21;

/// Vietnamese word tables.
pub const DICTIONARY: Dictionary = Dictionary {
    zero: "không",
    ones: &[
        "", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
    ],
    linking_ones: &[
        "", "mốt", "hai", "ba", "bốn", "lăm", "sáu", "bảy", "tám", "chín",
    ],
    teens: &[
        "mười",
        "mười một",
        "mười hai",
        "mười ba",
        "mười bốn",
        "mười lăm",
        "mười sáu",
        "mười bảy",
        "mười tám",
        "mười chín",
    ],
    tens: &[
        "",
        "",
        "hai mươi",
        "ba mươi",
        "bốn mươi",
        "năm mươi",
        "sáu mươi",
        "bảy mươi",
        "tám mươi",
        "chín mươi",
    ],
    hundred: "trăm",
    radix: &["", "nghìn", "triệu", "tỷ"],
    delimiters: &[" ", "lẻ"],
};

/// A translator over the Vietnamese tables.
#[must_use]
pub fn translator() -> Translator {
    Translator::new(DICTIONARY, MAX_DIGITS)
}
