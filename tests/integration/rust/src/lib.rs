//! Integration test suite for the native intl shim
//!
//! This crate holds the behaviour every [`IntlPlatform`] must show, written
//! once and run against both the Android and the iOS realization.

use intl_shim::{IntlPlatform, NativeNumberFormat};
use intl_types::{CurrencyDisplay, NumberFormatOptions, PatternDefinition};

/// Re-export components for test convenience
pub mod components {
    pub use intl_cli;
    pub use intl_shim;
    pub use intl_types;
    pub use native_engines;
}

/// Shared checks, generic over the platform
pub mod contract {
    use super::*;

    fn pattern<P: IntlPlatform>(platform: &P, definition: &PatternDefinition, locale: Option<&str>) -> String {
        platform
            .native_date_pattern(definition, locale)
            .expect("date pattern")
    }

    /// The no-date, no-time, no-locale request gives one answer whatever ran before it
    pub fn default_case_is_stable<P: IntlPlatform>(platform: &P) {
        let first = pattern(platform, &PatternDefinition::none(), None);
        pattern(platform, &PatternDefinition::date("full"), Some("fr-FR"));
        pattern(platform, &PatternDefinition::time("true"), Some("de-DE"));
        pattern(platform, &PatternDefinition::none(), Some("it-IT"));
        let second = pattern(platform, &PatternDefinition::none(), None);
        assert_eq!(first, second, "{}", platform.name());

        let empty = pattern(platform, &PatternDefinition::none(), Some(""));
        assert_eq!(first, empty, "{}: empty tag is no tag", platform.name());
    }

    /// A full date request differs from a short one
    pub fn full_and_short_dates_differ<P: IntlPlatform>(platform: &P) {
        let full = pattern(platform, &PatternDefinition::date("full"), Some("fr-FR"));
        let short = pattern(platform, &PatternDefinition::date("short"), Some("fr-FR"));
        let other = pattern(platform, &PatternDefinition::date("medium"), Some("fr-FR"));
        assert_ne!(full, short, "{}", platform.name());
        assert_eq!(short, other, "{}: non-full dates are short", platform.name());
        assert!(full.contains("EEEE"), "{}: {}", platform.name(), full);
    }

    /// The time style never depends on the requested granularity
    pub fn time_granularity_is_ignored<P: IntlPlatform>(platform: &P) {
        for locale in [None, Some("en-GB"), Some("de-DE")] {
            let base = pattern(platform, &PatternDefinition::time("true"), locale);
            for granularity in ["hour", "minute", "second", "short"] {
                let other = pattern(platform, &PatternDefinition::time(granularity), locale);
                assert_eq!(base, other, "{} {:?}", platform.name(), locale);
            }
            let with_date = pattern(platform, &PatternDefinition::date_time("full", "short"), locale);
            let with_date_long = pattern(platform, &PatternDefinition::date_time("full", "long"), locale);
            assert_eq!(with_date, with_date_long, "{} {:?}", platform.name(), locale);
        }
    }

    /// Code display shows the ISO code instead of the symbol
    pub fn code_display_shows_iso_code<P: IntlPlatform>(platform: &P) {
        let options = NumberFormatOptions::currency("USD").with_currency_display(CurrencyDisplay::Code);
        let format = platform
            .number_format(Some("en-US"), &options, None)
            .expect("number format");
        let text = format.format_native(1234.5);
        assert!(text.contains("USD"), "{}: {}", platform.name(), text);
        assert!(!text.contains('$'), "{}: {}", platform.name(), text);
    }

    /// A narrow symbol request for a code missing from the table keeps the engine symbol
    pub fn narrow_symbol_falls_back<P: IntlPlatform>(platform: &P) {
        let narrow = NumberFormatOptions::currency("XTS").with_currency_display(CurrencyDisplay::NarrowSymbol);
        let plain = NumberFormatOptions::currency("XTS");
        let narrow = platform
            .number_format(Some("en-US"), &narrow, None)
            .expect("narrow format")
            .format_native(42.0);
        let plain = platform
            .number_format(Some("en-US"), &plain, None)
            .expect("plain format")
            .format_native(42.0);
        assert_eq!(narrow, plain, "{}", platform.name());
        assert!(narrow.contains("XTS"), "{}: {}", platform.name(), narrow);
    }

    /// Repeated renderings with the same configuration agree
    pub fn rendering_is_idempotent<P: IntlPlatform>(platform: &P) {
        let options = NumberFormatOptions::currency("EUR").with_fraction_digits(2, 2);
        let format = platform
            .number_format(Some("de-DE"), &options, None)
            .expect("number format");
        let again = platform
            .number_format(Some("de-DE"), &options, None)
            .expect("number format");
        for value in [0.0, -1.5, 1234567.891, 1e-7] {
            let first = format.format_native(value);
            assert_eq!(first, format.format_native(value), "{}", platform.name());
            assert_eq!(first, again.format_native(value), "{}", platform.name());
        }
    }

    /// Run every check
    pub fn all<P: IntlPlatform>(platform: &P) {
        default_case_is_stable(platform);
        full_and_short_dates_differ(platform);
        time_granularity_is_ignored(platform);
        code_display_shows_iso_code(platform);
        narrow_symbol_falls_back(platform);
        rendering_is_idempotent(platform);
    }
}
