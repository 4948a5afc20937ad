//! Decimal pattern parsing and rendering shared by both engines.
//!
//! Patterns follow the `java.text.DecimalFormat` / LDML syntax:
//!
//! ```text
//! prefix  integer  [. fraction]  suffix  [; negative-prefix ... negative-suffix]
//! ```
//!
//! `#` is an optional digit, `0` a required digit, `,` marks the grouping
//! interval, `.` the decimal point. In affixes `¤` stands for the currency
//! symbol, `¤¤` for the ISO code, `%` and `‰` scale the value, `-` is the
//! locale minus sign, and `'...'` quotes literal text (`''` is a quote).

use intl_types::{IntlError, IntlResult};

use crate::currency;
use crate::locale_data::LocaleData;

/// The currency placeholder character
pub const CURRENCY_SIGN: char = '\u{a4}';

/// Upper bound on integer digits, as in `java.text.DecimalFormat`
pub const MAX_INTEGER_DIGITS: u32 = 309;

/// Upper bound on fraction digits, as in `java.text.DecimalFormat`
pub const MAX_FRACTION_DIGITS: u32 = 340;

/// One element of a prefix or suffix
#[derive(Debug, Clone, PartialEq, Eq)]
enum AffixPart {
    Literal(String),
    CurrencySymbol,
    CurrencyCode,
    Percent,
    PerMille,
    Minus,
}

type Affix = Vec<AffixPart>;

/// Locale symbols used while rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalSymbols {
    /// Digit grouping separator
    pub grouping_separator: char,
    /// Decimal separator
    pub decimal_separator: char,
    /// Decimal separator for currency formats
    pub monetary_decimal_separator: char,
    /// Percent sign
    pub percent: char,
    /// Per-mille sign
    pub per_mille: char,
    /// Minus sign
    pub minus_sign: char,
    /// Currency symbol substituted for `¤`
    pub currency_symbol: String,
    /// ISO code substituted for `¤¤`
    pub international_currency_symbol: String,
    /// Rendering of infinity
    pub infinity: String,
    /// Rendering of NaN
    pub nan: String,
}

impl DecimalSymbols {
    /// Symbols for a locale entry, with the region's default currency bound
    pub fn for_locale(data: &LocaleData, region: Option<&str>) -> Self {
        let currency = region.and_then(currency::default_for_region);
        DecimalSymbols {
            grouping_separator: data.grouping_separator,
            decimal_separator: data.decimal_separator,
            monetary_decimal_separator: data.decimal_separator,
            percent: data.percent_sign,
            per_mille: '‰',
            minus_sign: data.minus_sign,
            currency_symbol: currency
                .map(|c| c.symbol_for(region).to_string())
                .unwrap_or_else(|| CURRENCY_SIGN.to_string()),
            international_currency_symbol: currency
                .map(|c| c.code.to_string())
                .unwrap_or_else(|| "XXX".to_string()),
            infinity: "∞".to_string(),
            nan: "NaN".to_string(),
        }
    }
}

/// A parsed decimal pattern together with its mutable digit settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalPattern {
    positive_prefix: Affix,
    positive_suffix: Affix,
    negative: Option<(Affix, Affix)>,
    min_integer_digits: u32,
    min_fraction_digits: u32,
    max_fraction_digits: u32,
    grouping_size: u32,
    grouping_used: bool,
    multiplier: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Prefix,
    Number,
    Suffix,
}

struct SubPattern {
    prefix: Affix,
    number: String,
    suffix: Affix,
}

impl DecimalPattern {
    /// Parse a pattern string
    ///
    /// # Examples
    /// ```
    /// use native_engines::decimal::DecimalPattern;
    ///
    /// let pattern = DecimalPattern::parse("¤#,##0.00").unwrap();
    /// assert_eq!(pattern.grouping_size(), 3);
    /// assert_eq!(pattern.max_fraction_digits(), 2);
    /// assert!(pattern.is_currency());
    /// ```
    pub fn parse(pattern: &str) -> IntlResult<Self> {
        let mut chars = pattern.chars().peekable();
        let positive = Self::parse_subpattern(pattern, &mut chars)?;
        let negative = if chars.peek().is_some() {
            let sub = Self::parse_subpattern(pattern, &mut chars)?;
            Some((sub.prefix, sub.suffix))
        } else {
            None
        };

        let mut parsed = DecimalPattern {
            positive_prefix: positive.prefix,
            positive_suffix: positive.suffix,
            negative,
            min_integer_digits: 0,
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            grouping_size: 0,
            grouping_used: false,
            multiplier: 1,
        };
        parsed.apply_number_part(pattern, &positive.number)?;
        parsed.multiplier = parsed.affix_multiplier();
        Ok(parsed)
    }

    /// The plain integer pattern `0`
    pub fn integer() -> Self {
        DecimalPattern {
            positive_prefix: Affix::new(),
            positive_suffix: Affix::new(),
            negative: None,
            min_integer_digits: 1,
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            grouping_size: 0,
            grouping_used: false,
            multiplier: 1,
        }
    }

    fn parse_subpattern(
        pattern: &str,
        chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    ) -> IntlResult<SubPattern> {
        let mut phase = Phase::Prefix;
        let mut prefix = Affix::new();
        let mut suffix = Affix::new();
        let mut number = String::new();
        let mut literal = String::new();

        let flush = |literal: &mut String, affix: &mut Affix| {
            if !literal.is_empty() {
                affix.push(AffixPart::Literal(std::mem::take(literal)));
            }
        };

        while let Some(c) = chars.next() {
            if matches!(c, '#' | '0' | ',' | '.') {
                match phase {
                    Phase::Prefix | Phase::Number => {
                        if phase == Phase::Prefix {
                            flush(&mut literal, &mut prefix);
                            phase = Phase::Number;
                        }
                        number.push(c);
                        continue;
                    }
                    Phase::Suffix => {
                        return Err(IntlError::malformed_pattern(
                            pattern,
                            format!("unquoted '{c}' in suffix"),
                        ));
                    }
                }
            }

            if phase == Phase::Number {
                phase = Phase::Suffix;
            }
            let affix = if phase == Phase::Prefix {
                &mut prefix
            } else {
                &mut suffix
            };

            match c {
                ';' => break,
                '\'' => {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        literal.push('\'');
                        continue;
                    }
                    let mut closed = false;
                    while let Some(q) = chars.next() {
                        if q == '\'' {
                            if chars.peek() == Some(&'\'') {
                                chars.next();
                                literal.push('\'');
                                continue;
                            }
                            closed = true;
                            break;
                        }
                        literal.push(q);
                    }
                    if !closed {
                        return Err(IntlError::malformed_pattern(pattern, "unterminated quote"));
                    }
                }
                CURRENCY_SIGN => {
                    flush(&mut literal, affix);
                    if chars.peek() == Some(&CURRENCY_SIGN) {
                        chars.next();
                        affix.push(AffixPart::CurrencyCode);
                    } else {
                        affix.push(AffixPart::CurrencySymbol);
                    }
                }
                '%' => {
                    flush(&mut literal, affix);
                    affix.push(AffixPart::Percent);
                }
                '‰' => {
                    flush(&mut literal, affix);
                    affix.push(AffixPart::PerMille);
                }
                '-' => {
                    flush(&mut literal, affix);
                    affix.push(AffixPart::Minus);
                }
                other => literal.push(other),
            }
        }

        let affix = if phase == Phase::Prefix {
            &mut prefix
        } else {
            &mut suffix
        };
        flush(&mut literal, affix);

        Ok(SubPattern {
            prefix,
            number,
            suffix,
        })
    }

    fn apply_number_part(&mut self, pattern: &str, number: &str) -> IntlResult<()> {
        if !number.contains(&['#', '0'][..]) {
            return Err(IntlError::malformed_pattern(pattern, "missing digit placeholder"));
        }

        let (integer, fraction) = match number.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (number, ""),
        };
        if fraction.contains(&['.', ','][..]) {
            return Err(IntlError::malformed_pattern(
                pattern,
                "separator inside the fraction part",
            ));
        }

        let zeros = |part: &str| part.chars().filter(|&c| c == '0').count();
        self.min_integer_digits = clamp_count(zeros(integer), MAX_INTEGER_DIGITS);
        self.min_fraction_digits = clamp_count(zeros(fraction), MAX_FRACTION_DIGITS);
        self.max_fraction_digits = clamp_count(fraction.chars().count(), MAX_FRACTION_DIGITS);

        if let Some(last_comma) = integer.rfind(',') {
            self.grouping_size = integer[last_comma + 1..].chars().count() as u32;
            self.grouping_used = self.grouping_size > 0;
        }
        Ok(())
    }

    fn affix_multiplier(&self) -> u32 {
        let affixes = [&self.positive_prefix, &self.positive_suffix];
        if affixes.iter().any(|a| a.contains(&AffixPart::PerMille)) {
            1000
        } else if affixes.iter().any(|a| a.contains(&AffixPart::Percent)) {
            100
        } else {
            1
        }
    }

    /// True if the positive affixes contain a currency placeholder
    pub fn is_currency(&self) -> bool {
        [&self.positive_prefix, &self.positive_suffix].iter().any(|affix| {
            affix
                .iter()
                .any(|part| matches!(part, AffixPart::CurrencySymbol | AffixPart::CurrencyCode))
        })
    }

    /// Minimum integer digits
    pub fn min_integer_digits(&self) -> u32 {
        self.min_integer_digits
    }

    /// Minimum fraction digits
    pub fn min_fraction_digits(&self) -> u32 {
        self.min_fraction_digits
    }

    /// Maximum fraction digits
    pub fn max_fraction_digits(&self) -> u32 {
        self.max_fraction_digits
    }

    /// Scale applied before rendering: 100 for percent, 1000 for per-mille
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Digits per group
    pub fn grouping_size(&self) -> u32 {
        self.grouping_size
    }

    /// Whether grouping separators are emitted
    pub fn is_grouping_used(&self) -> bool {
        self.grouping_used
    }

    /// Set the minimum integer digits, capped at [`MAX_INTEGER_DIGITS`]
    pub fn set_min_integer_digits(&mut self, digits: u32) {
        self.min_integer_digits = digits.min(MAX_INTEGER_DIGITS);
    }

    /// Set the minimum fraction digits, raising the maximum if needed
    ///
    /// Capped at [`MAX_FRACTION_DIGITS`].
    pub fn set_min_fraction_digits(&mut self, digits: u32) {
        let digits = digits.min(MAX_FRACTION_DIGITS);
        self.min_fraction_digits = digits;
        if self.max_fraction_digits < digits {
            self.max_fraction_digits = digits;
        }
    }

    /// Set the maximum fraction digits, lowering the minimum if needed
    ///
    /// Capped at [`MAX_FRACTION_DIGITS`].
    pub fn set_max_fraction_digits(&mut self, digits: u32) {
        let digits = digits.min(MAX_FRACTION_DIGITS);
        self.max_fraction_digits = digits;
        if self.min_fraction_digits > digits {
            self.min_fraction_digits = digits;
        }
    }

    /// Enable or disable grouping
    pub fn set_grouping_used(&mut self, used: bool) {
        self.grouping_used = used;
    }

    /// Serialize the current settings back into pattern syntax
    ///
    /// ```
    /// use native_engines::decimal::DecimalPattern;
    ///
    /// let mut pattern = DecimalPattern::parse("#,##0.###").unwrap();
    /// pattern.set_min_fraction_digits(2);
    /// assert_eq!(pattern.to_pattern(), "#,##0.00#");
    /// ```
    pub fn to_pattern(&self) -> String {
        let number = self.number_part();
        let mut result = String::new();
        write_affix(&mut result, &self.positive_prefix);
        result.push_str(&number);
        write_affix(&mut result, &self.positive_suffix);

        if let Some((prefix, suffix)) = &self.negative {
            result.push(';');
            write_affix(&mut result, prefix);
            result.push_str(&number);
            write_affix(&mut result, suffix);
        }
        result
    }

    fn number_part(&self) -> String {
        let grouping = self.grouping_used && self.grouping_size > 0;
        let width = if grouping {
            self.min_integer_digits.max(self.grouping_size + 1)
        } else {
            self.min_integer_digits.max(1)
        };

        let mut integer = Vec::new();
        for position in 0..width {
            if grouping && position > 0 && position % self.grouping_size == 0 {
                integer.push(',');
            }
            integer.push(if position < self.min_integer_digits { '0' } else { '#' });
        }
        if !grouping && self.min_integer_digits == 0 {
            integer.clear();
            integer.push('#');
        }
        let mut number: String = integer.into_iter().rev().collect();

        if self.max_fraction_digits > 0 {
            number.push('.');
            for position in 0..self.max_fraction_digits {
                number.push(if position < self.min_fraction_digits { '0' } else { '#' });
            }
        }
        number
    }

    /// Render `value` with these settings, `symbols`, and `grouping_glyph`
    /// as the character actually placed between digit groups.
    pub fn format(&self, value: f64, symbols: &DecimalSymbols, grouping_glyph: char) -> String {
        if value.is_nan() {
            return symbols.nan.clone();
        }

        let scaled = value.abs() * f64::from(self.multiplier);
        let (body, is_zero) = if scaled.is_infinite() {
            (symbols.infinity.clone(), false)
        } else {
            self.format_digits(scaled, symbols, grouping_glyph)
        };
        let negative = value.is_sign_negative() && !is_zero;

        let mut result = String::new();
        match (&self.negative, negative) {
            (Some((prefix, suffix)), true) => {
                expand_affix(&mut result, prefix, symbols);
                result.push_str(&body);
                expand_affix(&mut result, suffix, symbols);
            }
            (None, true) => {
                result.push(symbols.minus_sign);
                expand_affix(&mut result, &self.positive_prefix, symbols);
                result.push_str(&body);
                expand_affix(&mut result, &self.positive_suffix, symbols);
            }
            (_, false) => {
                expand_affix(&mut result, &self.positive_prefix, symbols);
                result.push_str(&body);
                expand_affix(&mut result, &self.positive_suffix, symbols);
            }
        }
        result
    }

    fn format_digits(&self, scaled: f64, symbols: &DecimalSymbols, grouping_glyph: char) -> (String, bool) {
        let fixed = fixed_digits(scaled, self.max_fraction_digits);
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (fixed.as_str(), ""),
        };

        let is_zero = integer.chars().chain(fraction.chars()).all(|c| c == '0');

        let mut fraction = fraction.to_string();
        while fraction.len() > self.min_fraction_digits as usize && fraction.ends_with('0') {
            fraction.pop();
        }
        while fraction.len() < self.min_fraction_digits as usize {
            fraction.push('0');
        }

        let mut integer = integer.trim_start_matches('0').to_string();
        while integer.len() < self.min_integer_digits as usize {
            integer.insert(0, '0');
        }
        if integer.is_empty() && fraction.is_empty() {
            integer.push('0');
        }

        let mut body = if self.grouping_used && self.grouping_size > 0 {
            group_digits(&integer, self.grouping_size as usize, grouping_glyph)
        } else {
            integer
        };

        if !fraction.is_empty() {
            body.push(if self.is_currency() {
                symbols.monetary_decimal_separator
            } else {
                symbols.decimal_separator
            });
            body.push_str(&fraction);
        }
        (body, is_zero)
    }
}

/// Plain digits of a non-negative `scaled` value with at most
/// `max_fraction_digits` after the `.`
///
/// Shortest round-trip digits are used when they fit, so wide fraction
/// bounds do not expose the binary expansion; otherwise the value is rounded.
/// Trailing fraction zeros may remain.
///
/// ```
/// use native_engines::decimal::fixed_digits;
///
/// assert_eq!(fixed_digits(0.1, 340), "0.1");
/// assert_eq!(fixed_digits(1234567.0001, 3), "1234567.000");
/// assert_eq!(fixed_digits(2.4, 0), "2");
/// ```
pub fn fixed_digits(scaled: f64, max_fraction_digits: u32) -> String {
    let max = max_fraction_digits.min(MAX_FRACTION_DIGITS) as usize;
    let shortest = scaled.to_string();
    match shortest.split_once('.') {
        Some((_, fraction)) if fraction.len() > max => format!("{:.*}", max, scaled),
        _ => shortest,
    }
}

fn clamp_count(count: usize, max: u32) -> u32 {
    u32::try_from(count).map_or(max, |count| count.min(max))
}

fn group_digits(integer: &str, size: usize, separator: char) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / size);
    for (index, digit) in digits.iter().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % size == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }
    grouped
}

fn expand_affix(out: &mut String, affix: &[AffixPart], symbols: &DecimalSymbols) {
    for part in affix {
        match part {
            AffixPart::Literal(text) => out.push_str(text),
            AffixPart::CurrencySymbol => out.push_str(&symbols.currency_symbol),
            AffixPart::CurrencyCode => out.push_str(&symbols.international_currency_symbol),
            AffixPart::Percent => out.push(symbols.percent),
            AffixPart::PerMille => out.push(symbols.per_mille),
            AffixPart::Minus => out.push(symbols.minus_sign),
        }
    }
}

fn write_affix(out: &mut String, affix: &[AffixPart]) {
    for part in affix {
        match part {
            AffixPart::Literal(text) => {
                let special = text
                    .chars()
                    .any(|c| matches!(c, '#' | '0'..='9' | ',' | '.' | ';' | '%' | '‰' | '-' | '\'' | CURRENCY_SIGN));
                if special {
                    out.push('\'');
                    out.push_str(&text.replace('\'', "''"));
                    out.push('\'');
                } else {
                    out.push_str(text);
                }
            }
            AffixPart::CurrencySymbol => out.push(CURRENCY_SIGN),
            AffixPart::CurrencyCode => {
                out.push(CURRENCY_SIGN);
                out.push(CURRENCY_SIGN);
            }
            AffixPart::Percent => out.push('%'),
            AffixPart::PerMille => out.push('‰'),
            AffixPart::Minus => out.push('-'),
        }
    }
}
