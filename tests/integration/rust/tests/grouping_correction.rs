//! Grouping separator correction tests
//!
//! Drives the Android platform over an engine that renders the wrong
//! grouping glyph for chosen locales.

use intl_shim::{
    correct_grouping_separator, AndroidIntl, GroupingContext, IntlPlatform, NativeNumberFormat,
};
use intl_types::NumberFormatOptions;
use native_engines::jdk::{JavaTextEngine, Locale};

fn defective(locale: Locale, glyph: char) -> AndroidIntl {
    AndroidIntl::with_engine(JavaTextEngine::new().with_grouping_defect(locale, glyph))
}

/// Test: a comma rendered in place of a dot is swapped in the integer part only
#[test]
fn test_comma_for_dot_in_currency() {
    let platform = defective(Locale::with_country("en", "BE"), ',');
    let format = platform
        .number_format(Some("en-BE"), &NumberFormatOptions::currency("EUR"), None)
        .unwrap();

    assert_eq!(format.format_native(1234567.89), "1.234.567,89\u{a0}€");
    assert_eq!(format.format_native(12.5), "12,50\u{a0}€");
}

/// Test: a fraction that rounds away leaves the whole integer part corrected
#[test]
fn test_fraction_rounded_away() {
    let platform = defective(Locale::with_country("en", "BE"), ',');
    let format = platform
        .number_format(Some("en-BE"), &NumberFormatOptions::decimal(), None)
        .unwrap();

    assert_eq!(format.decimal_format().format(1234567.0001), "1,234,567");
    assert_eq!(format.format_native(1234567.0001), "1.234.567");
    assert_eq!(format.format_native(1234567.0), "1.234.567");
    assert_eq!(format.format_native(1234567.25), "1.234.567,25");
}

/// Test: percent values are judged after scaling
#[test]
fn test_percent_fraction_after_scaling() {
    let platform = defective(Locale::with_country("en", "BE"), ',');
    let options = NumberFormatOptions::percent().with_fraction_digits(0, 1);
    let format = platform.number_format(Some("en-BE"), &options, None).unwrap();

    assert_eq!(format.format_native(12345.6702), "1.234.567%");
}

/// Test: a space-like separator is restored as a no-break space
#[test]
fn test_space_separator_restored() {
    let platform = defective(Locale::with_country("fr", "FR"), '.');
    let format = platform
        .number_format(Some("fr-FR"), &NumberFormatOptions::decimal(), None)
        .unwrap();
    let text = format.format_native(1234567.0);

    assert_eq!(text, "1\u{a0}234\u{a0}567");
}

/// Test: other locales on the same engine are left alone
#[test]
fn test_unaffected_locale() {
    let platform = defective(Locale::with_country("en", "BE"), ',');
    let format = platform
        .number_format(Some("en-US"), &NumberFormatOptions::decimal(), None)
        .unwrap();

    assert_eq!(format.format_native(1234567.25), "1,234,567.25");
}

/// Test: grouping turned off means nothing to correct
#[test]
fn test_grouping_disabled() {
    let platform = defective(Locale::with_country("en", "BE"), ',');
    let options = NumberFormatOptions::decimal().with_grouping(false);
    let format = platform.number_format(Some("en-BE"), &options, None).unwrap();

    assert_eq!(format.format_native(1234567.5), "1234567,5");
}

/// Test: a correct rendering comes back unchanged
#[test]
fn test_correct_rendering_is_unchanged() {
    let context = GroupingContext {
        grouping_used: true,
        grouping_size: 3,
        grouping_separator: '.',
        decimal_separator: ',',
        monetary_decimal_separator: ',',
        min_fraction_digits: 2,
        max_fraction_digits: 2,
        multiplier: 1,
        pattern: "¤#,##0.00".to_string(),
    };

    assert_eq!(
        correct_grouping_separator("€1,234,567,89", 1234567.89, &context),
        "€1.234.567,89"
    );
    assert_eq!(
        correct_grouping_separator("€1.234.567,89", 1234567.89, &context),
        "€1.234.567,89"
    );
    assert_eq!(correct_grouping_separator("€999,00", 999.0, &context), "€999,00");
}
