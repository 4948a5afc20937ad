//! The iOS realization, on the Foundation engine.

mod date_time;
mod number;

use chrono::{DateTime, Utc};
use intl_types::{IntlResult, NumberFormatOptions, PatternDefinition};
use native_engines::foundation::{FoundationEngine, NsLocale};

use crate::locale::LocaleResolver;
use crate::platform::IntlPlatform;

pub use number::IosNumberFormat;

/// Formatting on a Foundation engine
#[derive(Debug, Default)]
pub struct IosIntl {
    engine: FoundationEngine,
    locales: LocaleResolver<NsLocale>,
}

impl IosIntl {
    /// Platform over a default engine (`en_US`)
    pub fn new() -> Self {
        IosIntl::default()
    }

    /// Platform over a given engine
    pub fn with_engine(engine: FoundationEngine) -> Self {
        IosIntl {
            engine,
            locales: LocaleResolver::new(),
        }
    }

    /// The engine
    pub fn engine(&self) -> &FoundationEngine {
        &self.engine
    }

    /// The locale cache
    pub fn locales(&self) -> &LocaleResolver<NsLocale> {
        &self.locales
    }
}

impl IntlPlatform for IosIntl {
    type NumberFormat = IosNumberFormat;

    fn name(&self) -> &'static str {
        "ios"
    }

    fn native_date_pattern(
        &self,
        definition: &PatternDefinition,
        locale: Option<&str>,
    ) -> IntlResult<String> {
        date_time::native_pattern(&self.engine, &self.locales, definition, locale)
    }

    fn format_date_native(
        &self,
        pattern: &str,
        locale: Option<&str>,
        date: Option<DateTime<Utc>>,
    ) -> IntlResult<String> {
        date_time::format_native(&self.engine, &self.locales, pattern, locale, date)
    }

    fn number_format(
        &self,
        locale: Option<&str>,
        options: &NumberFormatOptions,
        pattern: Option<&str>,
    ) -> IntlResult<Self::NumberFormat> {
        number::configure(&self.engine, &self.locales, locale, options, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::NativeNumberFormat;
    use chrono::TimeZone;
    use intl_types::{CurrencyDisplay, IntlError};

    #[test]
    fn test_date_and_time_use_locale_glue() {
        let platform = IosIntl::new();
        let definition = PatternDefinition::date_time("full", "short");
        let pattern = platform.native_date_pattern(&definition, Some("de-DE")).unwrap();
        assert_eq!(pattern, "EEEE, d. MMMM y 'um' HH:mm:ss z");
    }

    #[test]
    fn test_short_date_time_glue() {
        let platform = IosIntl::new();
        let definition = PatternDefinition::date_time("medium", "long");
        let pattern = platform.native_date_pattern(&definition, None).unwrap();
        assert_eq!(pattern, "M/d/yy, h:mm:ss a z");
    }

    #[test]
    fn test_format_date_native_is_lenient() {
        let platform = IosIntl::new();
        let date = Utc.with_ymd_and_hms(2044, 4, 12, 9, 30, 0).unwrap();
        let text = platform
            .format_date_native("d MMM y QQ", Some("it"), Some(date))
            .unwrap();
        assert_eq!(text, "12 apr 2044 QQ");
    }

    #[test]
    fn test_unknown_currency_displays_code() {
        let platform = IosIntl::new();
        let format = platform
            .number_format(Some("en-US"), &NumberFormatOptions::currency("ABC"), None)
            .unwrap();
        assert_eq!(format.format_native(2.0), "ABC2.00");
    }

    #[test]
    fn test_code_display() {
        let platform = IosIntl::new();
        let options = NumberFormatOptions::currency("USD").with_currency_display(CurrencyDisplay::Code);
        let format = platform.number_format(Some("en_US"), &options, None).unwrap();
        assert_eq!(format.native_pattern(), "¤¤#,##0.00");
        assert_eq!(format.format_native(1234.5), "USD1,234.50");
    }

    #[test]
    fn test_explicit_pattern_overrides_digit_bounds() {
        let platform = IosIntl::new();
        let options = NumberFormatOptions::decimal().with_fraction_digits(4, 4);
        let format = platform
            .number_format(Some("en-US"), &options, Some("#,##0.0"))
            .unwrap();
        assert_eq!(format.format_native(1234.56), "1,234.6");
    }

    #[test]
    fn test_oversized_digit_bounds_are_capped() {
        let platform = IosIntl::new();
        let options = NumberFormatOptions::decimal().with_minimum_integer_digits(200_000);
        let format = platform.number_format(Some("en-US"), &options, None).unwrap();
        let text = format.format_native(7.0);
        assert_eq!(text.chars().filter(char::is_ascii_digit).count(), 309);
        assert!(text.ends_with("007"));

        let options = NumberFormatOptions::decimal().with_fraction_digits(u32::MAX, u32::MAX);
        let format = platform.number_format(Some("en-US"), &options, None).unwrap();
        let text = format.format_native(0.5);
        assert_eq!(text.len(), "0.".len() + 340);
        assert!(text.starts_with("0.5000"));
    }

    #[test]
    fn test_malformed_explicit_pattern_propagates() {
        let platform = IosIntl::new();
        let err = platform
            .number_format(None, &NumberFormatOptions::default(), Some("abc"))
            .unwrap_err();
        assert!(matches!(err, IntlError::MalformedPattern { .. }));
    }

    #[test]
    fn test_narrow_symbol_only_inside_currency_style() {
        let platform = IosIntl::new();
        let options =
            NumberFormatOptions::currency("CAD").with_currency_display(CurrencyDisplay::NarrowSymbol);
        let format = platform.number_format(Some("en-GB"), &options, None).unwrap();
        assert_eq!(format.format_native(3.0), "$3.00");

        let decimal = NumberFormatOptions {
            currency: Some("CAD".to_string()),
            currency_display: Some(CurrencyDisplay::NarrowSymbol),
            ..NumberFormatOptions::decimal()
        };
        let format = platform.number_format(Some("en-GB"), &decimal, None).unwrap();
        assert_eq!(format.format_native(3.0), "3");
    }
}
