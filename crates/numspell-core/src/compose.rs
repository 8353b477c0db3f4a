//! Trio composition: one digit group to one word phrase.
//!
//! Rules run in a fixed order for each group:
//!
//! 1. **Place-value word**: groups above the units position carry their
//!    radix word; an all-zero thousands group stays silent, while all-zero
//!    groups at the millions position and above still speak their radix
//!    word.
//! 2. **Hundreds**: a nonzero hundreds digit renders as plain digit word
//!    plus the hundred word, followed by the bridge token when the tens
//!    digit is zero but a units digit follows (101 reads "one hundred and
//!    one", not "one hundred one").
//! 3. **Tens/units**: a tens digit of 1 selects the irregular teen form;
//!    2..=9 selects the tens word plus a units word; 0 leaves the units
//!    word alone. The units word after a tens word comes from the linking
//!    table unless the group is below 100 and a radix word follows, in
//!    which case the plain form is spoken.
//! 4. **Low-group bridge**: in the least-significant group of a multi-group
//!    number, a bare units digit (tens zero) replaces the whole hundreds
//!    slot with the bridge token.
//! 5. The non-empty segments join with single spaces.

use smallvec::SmallVec;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::group::DigitGroup;

/// Composes the phrase for one digit group.
///
/// `position` counts from the least-significant group (0 = units group);
/// `total_groups` is the length of the whole sequence. The phrase is empty
/// for groups rule 1 silences entirely.
pub fn compose(
    dict: &Dictionary,
    group: DigitGroup,
    position: usize,
    total_groups: usize,
) -> Result<String> {
    let radix = radix_word(dict, group, position)?;
    let mut hundreds = hundreds_part(dict, group)?;
    let tens_units = tens_units_part(dict, group, radix)?;

    // Rule 4: the bridge replaces the hundreds slot outright, spoken
    // hundreds digit included.
    if position == 0 && total_groups > 1 && group.tens() == 0 && group.units() != 0 {
        hundreds = dict.bridge()?.to_string();
    }

    Ok(join_non_empty(
        [hundreds.as_str(), tens_units.as_str(), radix],
        " ",
    ))
}

/// Rule 1. Empty at the units position and for an all-zero thousands
/// group; otherwise the table word for `position`.
fn radix_word(dict: &Dictionary, group: DigitGroup, position: usize) -> Result<&'static str> {
    if position > 0 && (position >= 2 || !group.is_zero()) {
        dict.radix(position)
    } else {
        Ok("")
    }
}

/// Rule 2. Empty when the hundreds digit is zero.
fn hundreds_part(dict: &Dictionary, group: DigitGroup) -> Result<String> {
    if group.hundreds() == 0 {
        return Ok(String::new());
    }
    let mut parts: SmallVec<[&str; 3]> = SmallVec::new();
    parts.push(dict.one(group.hundreds())?);
    parts.push(dict.hundred);
    if group.tens() == 0 && group.units() != 0 {
        parts.push(dict.bridge()?);
    }
    Ok(join_non_empty(parts, " "))
}

/// Rule 3. Teen, tens-plus-units, or lone units word.
fn tens_units_part(dict: &Dictionary, group: DigitGroup, radix: &str) -> Result<String> {
    let units = group.units();
    match group.tens() {
        0 => Ok(dict.one(units)?.to_string()),
        1 => Ok(dict.teen(units)?.to_string()),
        tens => {
            // A bare tens-units group speaks the plain form before its
            // radix word; everywhere else the linking form applies.
            let unit_word = if group.value() < 100 && !radix.is_empty() {
                dict.one(units)?
            } else {
                dict.linking_one(units)?
            };
            let mut parts: SmallVec<[&str; 2]> = SmallVec::new();
            parts.push(dict.ten(tens)?);
            parts.push(unit_word);
            Ok(join_non_empty(parts, " "))
        }
    }
}

/// Joins the non-empty items with `sep`. Never produces leading, trailing,
/// or doubled separators.
pub(crate) fn join_non_empty<'a, I>(parts: I, sep: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(sep);
        }
        out.push_str(part);
    }
    out
}
