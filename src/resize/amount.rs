//! Resize amounts such as `10`, `10px` or `10 ppt`.

/// Unit of a resize amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeUnit {
    /// Logical pixels.
    Px,
    /// Percentage points of a reference size.
    Ppt,
    /// No unit given; the caller picks one.
    Default,
    /// Unrecognized unit. Callers must reject amounts with this unit.
    Invalid,
}

impl ResizeUnit {
    pub fn parse(unit: &str) -> Self {
        if unit.eq_ignore_ascii_case("px") {
            Self::Px
        } else if unit.eq_ignore_ascii_case("ppt") {
            Self::Ppt
        } else if unit.eq_ignore_ascii_case("default") {
            Self::Default
        } else {
            Self::Invalid
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAmount {
    pub amount: i32,
    pub unit: ResizeUnit,
}

impl ResizeAmount {
    pub const fn new(amount: i32, unit: ResizeUnit) -> Self {
        Self { amount, unit }
    }

    pub const fn px(amount: i32) -> Self {
        Self::new(amount, ResizeUnit::Px)
    }

    pub fn is_valid(self) -> bool {
        self.unit != ResizeUnit::Invalid
    }

    /// Parses an amount from `first`, looking at `next` for a separate unit.
    ///
    /// Returns the amount and how many arguments it took up, one or two. An unknown unit
    /// attached to the number yields [`ResizeUnit::Invalid`]; an unknown separate argument is
    /// left for the caller and the unit is [`ResizeUnit::Default`].
    pub fn parse(first: &str, next: Option<&str>) -> (Self, usize) {
        let (amount, rest) = split_leading_int(first);
        if !rest.is_empty() {
            return (Self::new(amount, ResizeUnit::parse(rest)), 1);
        }

        let Some(next) = next else {
            return (Self::new(amount, ResizeUnit::Default), 1);
        };

        match ResizeUnit::parse(next) {
            ResizeUnit::Invalid => (Self::new(amount, ResizeUnit::Default), 1),
            unit => (Self::new(amount, unit), 2),
        }
    }

    /// Multiplies the amount, saturating at the `i32` bounds.
    pub fn scaled(self, multiplier: i32) -> Self {
        Self::new(self.amount.saturating_mul(multiplier), self.unit)
    }
}

/// Splits a leading decimal integer off `s`.
///
/// Leading whitespace and a sign are accepted. Without any digits the value is zero and the
/// whole input is returned as the remainder. Values out of `i32` range saturate.
fn split_leading_int(s: &str) -> (i32, &str) {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();

    let negative = bytes.first() == Some(&b'-');
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return (0, s);
    }

    let end = sign_len + digits;
    let magnitude = bytes[sign_len..end].iter().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };
    let value = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    (value, &trimmed[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_names() {
        assert_eq!(ResizeUnit::parse("px"), ResizeUnit::Px);
        assert_eq!(ResizeUnit::parse("PX"), ResizeUnit::Px);
        assert_eq!(ResizeUnit::parse("ppt"), ResizeUnit::Ppt);
        assert_eq!(ResizeUnit::parse("Default"), ResizeUnit::Default);
        assert_eq!(ResizeUnit::parse("pt"), ResizeUnit::Invalid);
        assert_eq!(ResizeUnit::parse(""), ResizeUnit::Invalid);
    }

    #[test]
    fn attached_unit() {
        assert_eq!(
            ResizeAmount::parse("10px", Some("ppt")),
            (ResizeAmount::new(10, ResizeUnit::Px), 1)
        );
        assert_eq!(
            ResizeAmount::parse("-25PPT", None),
            (ResizeAmount::new(-25, ResizeUnit::Ppt), 1)
        );
    }

    #[test]
    fn attached_garbage_is_invalid() {
        let (amount, consumed) = ResizeAmount::parse("10xyz", Some("px"));
        assert_eq!(amount.unit, ResizeUnit::Invalid);
        assert!(!amount.is_valid());
        assert_eq!(consumed, 1);
    }

    #[test]
    fn separate_unit() {
        assert_eq!(
            ResizeAmount::parse("10", Some("px")),
            (ResizeAmount::new(10, ResizeUnit::Px), 2)
        );
        assert_eq!(
            ResizeAmount::parse("+7", Some("default")),
            (ResizeAmount::new(7, ResizeUnit::Default), 2)
        );
    }

    #[test]
    fn unknown_separate_argument_is_left_alone() {
        assert_eq!(
            ResizeAmount::parse("10", Some("or")),
            (ResizeAmount::new(10, ResizeUnit::Default), 1)
        );
        assert_eq!(
            ResizeAmount::parse("10", None),
            (ResizeAmount::new(10, ResizeUnit::Default), 1)
        );
    }

    #[test]
    fn missing_number() {
        assert_eq!(
            ResizeAmount::parse("px", None),
            (ResizeAmount::new(0, ResizeUnit::Px), 1)
        );
        assert_eq!(
            ResizeAmount::parse("width", Some("px")),
            (ResizeAmount::new(0, ResizeUnit::Invalid), 1)
        );
        assert_eq!(
            ResizeAmount::parse("-", None),
            (ResizeAmount::new(0, ResizeUnit::Invalid), 1)
        );
    }

    #[test]
    fn huge_numbers_saturate() {
        let (amount, _) = ResizeAmount::parse("99999999999999999999999px", None);
        assert_eq!(amount, ResizeAmount::px(i32::MAX));

        let (amount, _) = ResizeAmount::parse("-99999999999", None);
        assert_eq!(amount.amount, i32::MIN);
    }

    #[test]
    fn scaling_saturates() {
        assert_eq!(ResizeAmount::px(10).scaled(-1), ResizeAmount::px(-10));
        assert_eq!(ResizeAmount::px(i32::MIN).scaled(-1), ResizeAmount::px(i32::MAX));
    }
}
