//! `java.util.Currency`, `java.text.DecimalFormatSymbols` and
//! `java.text.DecimalFormat`

use intl_types::{IntlError, IntlResult};

use super::Locale;
use crate::currency::{self, CurrencyData};
use crate::decimal::{DecimalPattern, DecimalSymbols};

// ============================================================================
// Currency
// ============================================================================

/// An ISO 4217 currency
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    data: &'static CurrencyData,
}

impl Currency {
    /// `Currency.getInstance(code)`; the code must match exactly
    ///
    /// # Errors
    /// [`IntlError::InvalidCurrency`] for codes the engine does not know.
    pub fn get_instance(code: &str) -> IntlResult<Self> {
        currency::lookup(code)
            .map(|data| Currency { data })
            .ok_or_else(|| IntlError::InvalidCurrency(code.to_string()))
    }

    /// ISO code
    pub fn currency_code(&self) -> &'static str {
        self.data.code
    }

    /// Symbol as displayed in `locale`
    pub fn symbol(&self, locale: &Locale) -> &'static str {
        self.data.symbol_for(locale.region())
    }

    /// Default number of fraction digits
    pub fn default_fraction_digits(&self) -> u32 {
        self.data.fraction_digits
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.data.code == other.data.code
    }
}

impl Eq for Currency {}

// ============================================================================
// DecimalFormatSymbols
// ============================================================================

/// Locale symbols a `DecimalFormat` renders with
///
/// `rendered_grouping` is the glyph the renderer really places between digit
/// groups. It equals `grouping_separator()` except on engines built with a
/// grouping defect for this locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormatSymbols {
    locale: Locale,
    symbols: DecimalSymbols,
    rendered_grouping: char,
}

impl DecimalFormatSymbols {
    pub(crate) fn new(locale: &Locale, rendered_grouping: Option<char>) -> Self {
        let symbols = DecimalSymbols::for_locale(locale.data(), locale.region());
        DecimalFormatSymbols {
            locale: locale.clone(),
            rendered_grouping: rendered_grouping.unwrap_or(symbols.grouping_separator),
            symbols,
        }
    }

    /// Locale these symbols were built for
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Grouping separator
    pub fn grouping_separator(&self) -> char {
        self.symbols.grouping_separator
    }

    /// Decimal separator
    pub fn decimal_separator(&self) -> char {
        self.symbols.decimal_separator
    }

    /// Decimal separator used by currency formats
    pub fn monetary_decimal_separator(&self) -> char {
        self.symbols.monetary_decimal_separator
    }

    /// Symbol substituted for `¤`
    pub fn currency_symbol(&self) -> &str {
        &self.symbols.currency_symbol
    }

    /// Code substituted for `¤¤`
    pub fn international_currency_symbol(&self) -> &str {
        &self.symbols.international_currency_symbol
    }

    /// Bind a currency: updates both the symbol and the ISO code
    pub fn set_currency(&mut self, currency: &Currency) {
        self.symbols.currency_symbol = currency.symbol(&self.locale).to_string();
        self.symbols.international_currency_symbol = currency.currency_code().to_string();
    }

    /// Override the displayed symbol only
    pub fn set_currency_symbol(&mut self, symbol: &str) {
        self.symbols.currency_symbol = symbol.to_string();
    }
}

// ============================================================================
// DecimalFormat
// ============================================================================

/// A pattern-driven number format
///
/// # Examples
/// ```
/// use native_engines::jdk::{Currency, JavaTextEngine, Locale};
///
/// let engine = JavaTextEngine::new();
/// let mut format = engine.get_currency_instance(&Locale::us()).unwrap();
/// format.set_currency(&Currency::get_instance("JPY").unwrap());
/// assert_eq!(format.format(1234.0), "¥1,234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormat {
    pattern: DecimalPattern,
    symbols: DecimalFormatSymbols,
}

impl DecimalFormat {
    pub(crate) fn new(pattern: &str, symbols: DecimalFormatSymbols) -> IntlResult<Self> {
        Ok(DecimalFormat {
            pattern: DecimalPattern::parse(pattern)?,
            symbols,
        })
    }

    /// Bind a currency; currency formats also adopt its fraction digits
    pub fn set_currency(&mut self, currency: &Currency) {
        self.symbols.set_currency(currency);
        if self.pattern.is_currency() {
            let digits = currency.default_fraction_digits();
            self.pattern.set_min_fraction_digits(digits);
            self.pattern.set_max_fraction_digits(digits);
        }
    }

    /// `setMinimumIntegerDigits`
    pub fn set_minimum_integer_digits(&mut self, digits: u32) {
        self.pattern.set_min_integer_digits(digits);
    }

    /// `setMinimumFractionDigits`; raises the maximum when needed
    pub fn set_minimum_fraction_digits(&mut self, digits: u32) {
        self.pattern.set_min_fraction_digits(digits);
    }

    /// `setMaximumFractionDigits`; lowers the minimum when needed
    pub fn set_maximum_fraction_digits(&mut self, digits: u32) {
        self.pattern.set_max_fraction_digits(digits);
    }

    /// `setGroupingUsed`
    pub fn set_grouping_used(&mut self, used: bool) {
        self.pattern.set_grouping_used(used);
    }

    /// `isGroupingUsed`
    pub fn is_grouping_used(&self) -> bool {
        self.pattern.is_grouping_used()
    }

    /// `getGroupingSize`
    pub fn grouping_size(&self) -> u32 {
        self.pattern.grouping_size()
    }

    /// Minimum fraction digits
    pub fn minimum_fraction_digits(&self) -> u32 {
        self.pattern.min_fraction_digits()
    }

    /// Maximum fraction digits
    pub fn maximum_fraction_digits(&self) -> u32 {
        self.pattern.max_fraction_digits()
    }

    /// `getMultiplier`
    pub fn multiplier(&self) -> u32 {
        self.pattern.multiplier()
    }

    /// `getDecimalFormatSymbols`
    pub fn decimal_format_symbols(&self) -> &DecimalFormatSymbols {
        &self.symbols
    }

    /// `setDecimalFormatSymbols`
    pub fn set_decimal_format_symbols(&mut self, symbols: DecimalFormatSymbols) {
        self.symbols = symbols;
    }

    /// `toPattern`
    pub fn to_pattern(&self) -> String {
        self.pattern.to_pattern()
    }

    /// `format(double)`
    pub fn format(&self, value: f64) -> String {
        self.pattern
            .format(value, &self.symbols.symbols, self.symbols.rendered_grouping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_for(pattern: &str, locale: &Locale) -> DecimalFormat {
        DecimalFormat::new(pattern, DecimalFormatSymbols::new(locale, None)).unwrap()
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let err = Currency::get_instance("ABC").unwrap_err();
        assert_eq!(err, IntlError::InvalidCurrency("ABC".to_string()));
        assert!(Currency::get_instance("eur").is_err());
    }

    #[test]
    fn test_currency_symbol_per_locale() {
        let usd = Currency::get_instance("USD").unwrap();
        assert_eq!(usd.symbol(&Locale::us()), "$");
        assert_eq!(usd.symbol(&Locale::with_country("en", "GB")), "US$");
    }

    #[test]
    fn test_symbols_set_currency() {
        let mut symbols = DecimalFormatSymbols::new(&Locale::with_country("en", "GB"), None);
        assert_eq!(symbols.currency_symbol(), "£");
        symbols.set_currency(&Currency::get_instance("EUR").unwrap());
        assert_eq!(symbols.currency_symbol(), "€");
        assert_eq!(symbols.international_currency_symbol(), "EUR");
        symbols.set_currency_symbol("E");
        assert_eq!(symbols.currency_symbol(), "E");
        assert_eq!(symbols.international_currency_symbol(), "EUR");
    }

    #[test]
    fn test_set_currency_adjusts_currency_formats_only() {
        let jpy = Currency::get_instance("JPY").unwrap();

        let mut currency = format_for("¤#,##0.00", &Locale::us());
        currency.set_currency(&jpy);
        assert_eq!(currency.maximum_fraction_digits(), 0);

        let mut decimal = format_for("#,##0.###", &Locale::us());
        decimal.set_currency(&jpy);
        assert_eq!(decimal.maximum_fraction_digits(), 3);
    }

    #[test]
    fn test_rendered_grouping_glyph() {
        let locale = Locale::with_country("en", "BE");
        let symbols = DecimalFormatSymbols::new(&locale, Some(','));
        assert_eq!(symbols.grouping_separator(), '.');

        let format = DecimalFormat::new("#,##0.###", symbols).unwrap();
        assert_eq!(format.format(1234567.0), "1,234,567");
    }

    #[test]
    fn test_setters_reach_the_pattern() {
        let mut format = format_for("#,##0.###", &Locale::us());
        format.set_minimum_integer_digits(3);
        format.set_minimum_fraction_digits(2);
        format.set_grouping_used(false);
        assert_eq!(format.to_pattern(), "000.00#");
        assert_eq!(format.format(5.0), "005.00");
    }
}
