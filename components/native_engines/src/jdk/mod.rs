//! `java.text`-style formatting engine
//!
//! [`JavaTextEngine`] is the entry point. It plays the role of the static
//! factories of `java.text.NumberFormat` / `java.text.DateFormat` and of the
//! JVM default locale, so each engine value is an isolated "device".
//!
//! # Grouping defects
//!
//! Some device builds render a wrong grouping glyph for certain locales while
//! still reporting the correct one through `DecimalFormatSymbols`. An engine
//! built with [`JavaTextEngine::with_grouping_defect`] reproduces that:
//!
//! ```
//! use native_engines::jdk::{JavaTextEngine, Locale};
//!
//! let be = Locale::with_country("en", "BE");
//! let engine = JavaTextEngine::new().with_grouping_defect(be.clone(), ',');
//! let format = engine.get_number_instance(&be).unwrap();
//!
//! assert_eq!(format.decimal_format_symbols().grouping_separator(), '.');
//! assert_eq!(format.format(1234567.5), "1,234,567,5");
//! ```

mod date;
mod locale;
mod number;

use intl_types::IntlResult;
use tracing::trace;

pub use date::{constant_for_style, style_from_constant, SimpleDateFormat, DEFAULT, FULL, LONG, MEDIUM, SHORT};
pub use locale::Locale;
pub use number::{Currency, DecimalFormat, DecimalFormatSymbols};

/// The `java.text` engine of one device
#[derive(Debug, Clone, Default)]
pub struct JavaTextEngine {
    default_locale: Locale,
    grouping_defects: Vec<(Locale, char)>,
}

impl JavaTextEngine {
    /// Engine with `en_US` as default locale and no defects
    pub fn new() -> Self {
        JavaTextEngine::default()
    }

    /// Engine with another default locale
    pub fn with_default_locale(locale: Locale) -> Self {
        JavaTextEngine {
            default_locale: locale,
            grouping_defects: Vec::new(),
        }
    }

    /// Make number formats for `locale` render `glyph` between digit groups
    pub fn with_grouping_defect(mut self, locale: Locale, glyph: char) -> Self {
        self.grouping_defects.retain(|(known, _)| *known != locale);
        self.grouping_defects.push((locale, glyph));
        self
    }

    /// `Locale.getDefault()`
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    fn resolve<'a>(&'a self, locale: Option<&'a Locale>) -> &'a Locale {
        locale.unwrap_or(&self.default_locale)
    }

    /// `new DecimalFormatSymbols(locale)`, or the default locale's symbols
    pub fn decimal_format_symbols(&self, locale: Option<&Locale>) -> DecimalFormatSymbols {
        let locale = self.resolve(locale);
        let defect = self
            .grouping_defects
            .iter()
            .find(|(known, _)| known == locale)
            .map(|(_, glyph)| *glyph);
        if let Some(glyph) = defect {
            trace!(locale = %locale, glyph = ?glyph, "grouping defect active");
        }
        DecimalFormatSymbols::new(locale, defect)
    }

    /// `new DecimalFormat(pattern)`, with the default locale's symbols
    ///
    /// # Errors
    /// [`intl_types::IntlError::MalformedPattern`] if `pattern` does not parse.
    pub fn decimal_format(&self, pattern: &str) -> IntlResult<DecimalFormat> {
        DecimalFormat::new(pattern, self.decimal_format_symbols(None))
    }

    fn instance(&self, locale: &Locale, pattern: &str) -> IntlResult<DecimalFormat> {
        DecimalFormat::new(pattern, self.decimal_format_symbols(Some(locale)))
    }

    /// `NumberFormat.getNumberInstance(locale)`
    pub fn get_number_instance(&self, locale: &Locale) -> IntlResult<DecimalFormat> {
        self.instance(locale, locale.data().decimal_pattern)
    }

    /// `NumberFormat.getPercentInstance(locale)`
    pub fn get_percent_instance(&self, locale: &Locale) -> IntlResult<DecimalFormat> {
        self.instance(locale, locale.data().percent_pattern)
    }

    /// `NumberFormat.getCurrencyInstance(locale)`
    pub fn get_currency_instance(&self, locale: &Locale) -> IntlResult<DecimalFormat> {
        self.instance(locale, locale.data().currency_pattern)
    }

    /// `DateFormat.getDateTimeInstance(dateStyle, timeStyle[, locale])`
    pub fn get_date_time_instance(
        &self,
        date_style: i32,
        time_style: i32,
        locale: Option<&Locale>,
    ) -> IntlResult<SimpleDateFormat> {
        let locale = self.resolve(locale);
        let pattern = date::style_pattern(
            locale.data(),
            Some(style_from_constant(date_style)),
            Some(style_from_constant(time_style)),
        );
        SimpleDateFormat::new(&pattern, locale)
    }

    /// `DateFormat.getDateInstance(style[, locale])`
    pub fn get_date_instance(&self, style: i32, locale: Option<&Locale>) -> IntlResult<SimpleDateFormat> {
        let locale = self.resolve(locale);
        let pattern = date::style_pattern(locale.data(), Some(style_from_constant(style)), None);
        SimpleDateFormat::new(&pattern, locale)
    }

    /// `DateFormat.getTimeInstance(style[, locale])`
    pub fn get_time_instance(&self, style: i32, locale: Option<&Locale>) -> IntlResult<SimpleDateFormat> {
        let locale = self.resolve(locale);
        let pattern = date::style_pattern(locale.data(), None, Some(style_from_constant(style)));
        SimpleDateFormat::new(&pattern, locale)
    }

    /// `new SimpleDateFormat(pattern[, locale])`
    pub fn simple_date_format(&self, pattern: &str, locale: Option<&Locale>) -> IntlResult<SimpleDateFormat> {
        SimpleDateFormat::new(pattern, self.resolve(locale))
    }
}
