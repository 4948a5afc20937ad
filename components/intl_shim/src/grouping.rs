//! Grouping separator correction for number renderings.
//!
//! Some `java.text` builds put a wrong glyph between digit groups for certain
//! locales while their `DecimalFormatSymbols` still report the right one. The
//! correction below finds the glyph actually used and swaps it, in the
//! integer part only, for the locale separator. A rendering that already
//! contains the locale separator is returned as is.

use std::borrow::Cow;

use native_engines::decimal::{fixed_digits, CURRENCY_SIGN};
use tracing::debug;

/// Substitute for grouping separators other than `.` and `,`
pub const NO_BREAK_SPACE: char = '\u{a0}';

/// What the correction needs to know about the configured formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingContext {
    /// Whether grouping is enabled
    pub grouping_used: bool,
    /// Digits per group
    pub grouping_size: u32,
    /// The locale's grouping separator
    pub grouping_separator: char,
    /// The locale's decimal separator
    pub decimal_separator: char,
    /// The locale's monetary decimal separator
    pub monetary_decimal_separator: char,
    /// The formatter's minimum fraction digits
    pub min_fraction_digits: u32,
    /// The formatter's maximum fraction digits
    pub max_fraction_digits: u32,
    /// Scale applied before rendering (100 for percent)
    pub multiplier: u32,
    /// The formatter's pattern
    pub pattern: String,
}

impl GroupingContext {
    /// Plain digits of `value` as the formatter rounds them
    fn rounded_digits(&self, value: f64) -> String {
        let scaled = value.abs() * f64::from(self.multiplier);
        fixed_digits(scaled, self.max_fraction_digits)
    }

    /// True when `digits` render with a fraction part
    fn renders_fraction(&self, digits: &str) -> bool {
        if self.max_fraction_digits == 0 {
            return false;
        }
        self.min_fraction_digits > 0
            || digits
                .split_once('.')
                .is_some_and(|(_, fraction)| fraction.bytes().any(|digit| digit != b'0'))
    }

    fn needs_correction(&self, rendered: &str, digits: &str) -> bool {
        if !self.grouping_used || self.grouping_size == 0 {
            return false;
        }
        let integer = digits.split_once('.').map_or(digits, |(integer, _)| integer);
        let significant = integer.trim_start_matches('0').len();
        significant > self.grouping_size as usize && !rendered.contains(self.grouping_separator)
    }
}

/// The separator a correction inserts for `separator`
pub fn expected_separator(separator: char) -> char {
    match separator {
        '.' | ',' => separator,
        _ => NO_BREAK_SPACE,
    }
}

/// Correct the grouping separator of `rendered`, the rendering of `value`
///
/// ```
/// use intl_shim::{correct_grouping_separator, GroupingContext};
///
/// let context = GroupingContext {
///     grouping_used: true,
///     grouping_size: 3,
///     grouping_separator: '.',
///     decimal_separator: ',',
///     monetary_decimal_separator: ',',
///     min_fraction_digits: 2,
///     max_fraction_digits: 2,
///     multiplier: 1,
///     pattern: "¤#,##0.00".to_string(),
/// };
/// assert_eq!(
///     correct_grouping_separator("€1,234,567,89", 1234567.89, &context),
///     "€1.234.567,89"
/// );
/// assert_eq!(
///     correct_grouping_separator("€1.234.567,89", 1234567.89, &context),
///     "€1.234.567,89"
/// );
/// ```
pub fn correct_grouping_separator<'a>(
    rendered: &'a str,
    value: f64,
    context: &GroupingContext,
) -> Cow<'a, str> {
    if !value.is_finite() {
        return Cow::Borrowed(rendered);
    }
    let digits = context.rounded_digits(value);
    if !context.needs_correction(rendered, &digits) {
        return Cow::Borrowed(rendered);
    }
    let expected = expected_separator(context.grouping_separator);

    // Currency, percent and literal suffixes sit after the last digit.
    let digits_end = rendered
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_ascii_digit())
        .map_or(0, |(index, c)| index + c.len_utf8());
    let (body, suffix) = rendered.split_at(digits_end);

    let mut integer = body;
    let mut fraction = "";
    if context.renders_fraction(&digits) {
        let separator = if context.pattern.contains(CURRENCY_SIGN) {
            context.monetary_decimal_separator
        } else {
            context.decimal_separator
        };
        if let Some(index) = body.rfind(separator) {
            integer = &body[..index];
            fraction = &body[index..];
        }
    }

    let chars: Vec<char> = integer.chars().collect();
    let offset = context.grouping_size as usize + 1;
    let wrong = match chars.len().checked_sub(offset).map(|index| chars[index]) {
        Some(c) if !c.is_ascii_digit() && c != expected => c,
        _ => return Cow::Borrowed(rendered),
    };

    debug!(wrong = ?wrong, expected = ?expected, "correcting grouping separator");
    let integer = integer.replace(wrong, &expected.to_string());
    Cow::Owned(format!("{integer}{fraction}{suffix}"))
}
