//! Digit groups: the three-digit units the composer consumes.
//!
//! A number is an ordered sequence of [`DigitGroup`]s, least significant
//! first: index 0 holds the source number's hundreds/tens/units, index 1
//! its thousands, and so on. [`tokenize`] produces such a sequence from an
//! integer by base-1000 division; callers with pre-split input build
//! groups directly with [`DigitGroup::new`].

use std::fmt;

/// Decimal digits per group.
pub const GROUP_DIGITS: usize = 3;

const GROUP_BASE: u128 = 1000;

/// One three-digit slice of a decimal number, always in `0..=999`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct DigitGroup(u16);

impl DigitGroup {
    /// Largest representable group value.
    pub const MAX: u16 = 999;

    /// The all-zero group.
    pub const ZERO: Self = Self(0);

    /// Wraps a group value; `None` above [`Self::MAX`].
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        if value <= Self::MAX { Some(Self(value)) } else { None }
    }

    /// The group value in `0..=999`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Hundreds digit, `0..=9`.
    #[inline]
    #[must_use]
    pub const fn hundreds(self) -> u8 {
        (self.0 / 100) as u8
    }

    /// Tens digit, `0..=9`.
    #[inline]
    #[must_use]
    pub const fn tens(self) -> u8 {
        (self.0 / 10 % 10) as u8
    }

    /// Units digit, `0..=9`.
    #[inline]
    #[must_use]
    pub const fn units(self) -> u8 {
        (self.0 % 10) as u8
    }

    /// Whether all three digits are zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DigitGroup> for u16 {
    fn from(group: DigitGroup) -> Self {
        group.value()
    }
}

impl TryFrom<u16> for DigitGroup {
    type Error = InvalidDigitGroup;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDigitGroup(value))
    }
}

/// A group value above [`DigitGroup::MAX`], rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDigitGroup(pub u16);

impl fmt::Display for InvalidDigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "digit group value {} is outside 0..=999", self.0)
    }
}

impl std::error::Error for InvalidDigitGroup {}

/// Splits `value` into digit groups, least significant first.
///
/// Zero yields exactly one all-zero group so the translator's zero special
/// case applies. For any nonzero value the most significant produced group
/// is nonzero; no trailing zero groups are emitted.
#[must_use]
pub fn tokenize(value: u128) -> Vec<DigitGroup> {
    if value == 0 {
        return vec![DigitGroup::ZERO];
    }
    let mut groups = Vec::new();
    let mut rest = value;
    while rest != 0 {
        groups.push(DigitGroup((rest % GROUP_BASE) as u16));
        rest /= GROUP_BASE;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::{DigitGroup, InvalidDigitGroup, tokenize};

    #[test]
    fn new_accepts_the_full_range() {
        assert_eq!(DigitGroup::new(0), Some(DigitGroup::ZERO));
        assert_eq!(DigitGroup::new(999).map(DigitGroup::value), Some(999));
        assert_eq!(DigitGroup::new(1000), None);
    }

    #[test]
    fn digits_decompose_by_place() {
        let group = DigitGroup::new(987).unwrap();
        assert_eq!(group.hundreds(), 9);
        assert_eq!(group.tens(), 8);
        assert_eq!(group.units(), 7);
        assert!(!group.is_zero());
    }

    #[test]
    fn low_values_have_zero_high_digits() {
        let group = DigitGroup::new(42).unwrap();
        assert_eq!(group.hundreds(), 0);
        assert_eq!(group.tens(), 4);
        assert_eq!(group.units(), 2);
    }

    #[test]
    fn try_from_mirrors_new() {
        assert_eq!(DigitGroup::try_from(321).map(DigitGroup::value), Ok(321));
        assert_eq!(DigitGroup::try_from(1_234), Err(InvalidDigitGroup(1_234)));
        assert_eq!(u16::from(DigitGroup::new(55).unwrap()), 55);
    }

    #[test]
    fn invalid_group_display_names_the_value() {
        let text = InvalidDigitGroup(4_096).to_string();
        assert!(text.contains("4096"), "got: {text}");
    }

    #[test]
    fn tokenize_zero_is_a_single_zero_group() {
        assert_eq!(tokenize(0), vec![DigitGroup::ZERO]);
    }

    #[test]
    fn tokenize_orders_least_significant_first() {
        let groups = tokenize(1_234);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].value(), 234);
        assert_eq!(groups[1].value(), 1);
    }

    #[test]
    fn tokenize_keeps_interior_zero_groups() {
        let groups = tokenize(1_000_000);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].value(), 0);
        assert_eq!(groups[1].value(), 0);
        assert_eq!(groups[2].value(), 1);
    }

    #[test]
    fn tokenize_never_emits_a_trailing_zero_group() {
        for value in [1u128, 999, 1_000, 12_345, 1_000_000_000, u128::MAX] {
            let groups = tokenize(value);
            assert!(
                !groups.last().unwrap().is_zero(),
                "trailing zero group for {value}"
            );
        }
    }

    #[test]
    fn tokenize_covers_the_locale_maximum() {
        // 21 digits, the largest Vietnamese input: seven groups.
        let groups = tokenize(999_999_999_999_999_999_999);
        assert_eq!(groups.len(), 7);
        assert!(groups.iter().all(|g| g.value() == 999));
    }
}
