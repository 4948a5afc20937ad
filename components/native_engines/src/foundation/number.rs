//! `NSNumberFormatter`

use intl_types::IntlResult;

use super::NsLocale;
use crate::currency;
use crate::decimal::{DecimalPattern, DecimalSymbols};

/// `NSNumberFormatterStyle`, limited to the styles the shim uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormatterStyle {
    /// `NSNumberFormatterNoStyle`
    #[default]
    NoStyle,
    /// `NSNumberFormatterDecimalStyle`
    Decimal,
    /// `NSNumberFormatterPercentStyle`
    Percent,
    /// `NSNumberFormatterCurrencyStyle`
    Currency,
}

/// A mutable number formatter, configured property by property
///
/// # Examples
/// ```
/// use native_engines::foundation::{NsLocale, NumberFormatter, NumberFormatterStyle};
///
/// let mut formatter = NumberFormatter::new();
/// formatter.set_locale(NsLocale::with_identifier("en_GB"));
/// formatter.set_number_style(NumberFormatterStyle::Currency);
/// formatter.set_currency_code("USD");
/// assert_eq!(formatter.string_from_number(12.5), "US$12.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    locale: NsLocale,
    style: NumberFormatterStyle,
    pattern: DecimalPattern,
    symbols: DecimalSymbols,
}

impl NumberFormatter {
    /// `[NSNumberFormatter new]`: current locale, no style
    pub fn new() -> Self {
        let locale = NsLocale::current();
        NumberFormatter {
            symbols: DecimalSymbols::for_locale(locale.data(), locale.country_code()),
            pattern: DecimalPattern::integer(),
            locale,
            style: NumberFormatterStyle::NoStyle,
        }
    }

    /// The formatter's locale
    pub fn locale(&self) -> &NsLocale {
        &self.locale
    }

    /// Change the locale; symbols and the style's pattern follow it
    pub fn set_locale(&mut self, locale: NsLocale) {
        self.symbols = DecimalSymbols::for_locale(locale.data(), locale.country_code());
        self.locale = locale;
        self.set_number_style(self.style);
    }

    /// Current style
    pub fn number_style(&self) -> NumberFormatterStyle {
        self.style
    }

    /// Select a style, resetting pattern and digit settings from the locale
    pub fn set_number_style(&mut self, style: NumberFormatterStyle) {
        let data = self.locale.data();
        let source = match style {
            NumberFormatterStyle::NoStyle => "0",
            NumberFormatterStyle::Decimal => data.decimal_pattern,
            NumberFormatterStyle::Percent => data.percent_pattern,
            NumberFormatterStyle::Currency => data.currency_pattern,
        };
        // Built-in patterns always parse; fall back to the bare integer form.
        self.pattern = DecimalPattern::parse(source).unwrap_or_else(|_| DecimalPattern::integer());
        self.style = style;
    }

    /// ISO code substituted for `¤¤`
    pub fn currency_code(&self) -> &str {
        &self.symbols.international_currency_symbol
    }

    /// Bind a currency by ISO code
    ///
    /// Unknown codes are accepted and display as the code itself. In the
    /// currency style the currency's fraction digits are adopted.
    pub fn set_currency_code(&mut self, code: &str) {
        let known = currency::lookup(code);
        self.symbols.international_currency_symbol = code.to_string();
        self.symbols.currency_symbol = known
            .map(|data| data.symbol_for(self.locale.country_code()).to_string())
            .unwrap_or_else(|| code.to_string());

        if let (Some(data), NumberFormatterStyle::Currency) = (known, self.style) {
            self.pattern.set_min_fraction_digits(data.fraction_digits);
            self.pattern.set_max_fraction_digits(data.fraction_digits);
        }
    }

    /// Symbol substituted for `¤`
    pub fn currency_symbol(&self) -> &str {
        &self.symbols.currency_symbol
    }

    /// Override the displayed currency symbol
    pub fn set_currency_symbol(&mut self, symbol: &str) {
        self.symbols.currency_symbol = symbol.to_string();
    }

    /// `minimumIntegerDigits`
    pub fn set_minimum_integer_digits(&mut self, digits: u32) {
        self.pattern.set_min_integer_digits(digits);
    }

    /// `minimumFractionDigits`
    pub fn set_minimum_fraction_digits(&mut self, digits: u32) {
        self.pattern.set_min_fraction_digits(digits);
    }

    /// `maximumFractionDigits`
    pub fn set_maximum_fraction_digits(&mut self, digits: u32) {
        self.pattern.set_max_fraction_digits(digits);
    }

    /// `usesGroupingSeparator`
    pub fn uses_grouping_separator(&self) -> bool {
        self.pattern.is_grouping_used()
    }

    /// Set `usesGroupingSeparator`
    pub fn set_uses_grouping_separator(&mut self, used: bool) {
        self.pattern.set_grouping_used(used);
    }

    /// `positiveFormat`
    pub fn positive_format(&self) -> String {
        self.pattern.to_pattern()
    }

    /// Set `positiveFormat`; digit and grouping settings are re-read from it
    ///
    /// # Errors
    /// [`intl_types::IntlError::MalformedPattern`] if `format` does not parse.
    pub fn set_positive_format(&mut self, format: &str) -> IntlResult<()> {
        self.pattern = DecimalPattern::parse(format)?;
        Ok(())
    }

    /// `stringFromNumber:`
    pub fn string_from_number(&self, value: f64) -> String {
        self.pattern
            .format(value, &self.symbols, self.symbols.grouping_separator)
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        NumberFormatter::new()
    }
}
