//! Platform contract tests
//!
//! Runs the shared contract against both platform realizations, then pins
//! the exact engine patterns each one produces for the decision table.

use integration_tests::contract;
use intl_shim::{AndroidIntl, IntlPlatform, IosIntl};
use intl_types::PatternDefinition;

/// Test: the Android platform honours the contract
#[test]
fn test_android_contract() {
    contract::all(&AndroidIntl::new());
}

/// Test: the iOS platform honours the contract
#[test]
fn test_ios_contract() {
    contract::all(&IosIntl::new());
}

/// Test: all eight decision table cases on Android
#[test]
fn test_android_decision_table() {
    let platform = AndroidIntl::new();
    let cases: [(PatternDefinition, Option<&str>, &str); 8] = [
        (PatternDefinition::none(), None, "EEEE, MMMM d, y h:mm:ss a zzzz"),
        (PatternDefinition::none(), Some("de-DE"), "dd.MM.yy HH:mm"),
        (PatternDefinition::date("full"), None, "EEEE, MMMM d, y"),
        (PatternDefinition::date("short"), Some("de-DE"), "dd.MM.yy"),
        (PatternDefinition::time("true"), None, "h:mm:ss a z"),
        (PatternDefinition::time("true"), Some("de-DE"), "HH:mm:ss z"),
        (PatternDefinition::date_time("short", "true"), None, "M/d/yy h:mm:ss a z"),
        (
            PatternDefinition::date_time("full", "true"),
            Some("fr-FR"),
            "EEEE d MMMM y HH:mm:ss z",
        ),
    ];

    for (definition, locale, expected) in cases {
        let pattern = platform.native_date_pattern(&definition, locale).unwrap();
        assert_eq!(pattern, expected, "{:?} {:?}", definition, locale);
    }
}

/// Test: iOS glues date and time with the locale's connector
#[test]
fn test_ios_date_time_glue() {
    let platform = IosIntl::new();
    let full = platform
        .native_date_pattern(&PatternDefinition::date_time("full", "true"), Some("de-DE"))
        .unwrap();
    let short = platform
        .native_date_pattern(&PatternDefinition::date_time("short", "true"), Some("de-DE"))
        .unwrap();

    assert_eq!(full, "EEEE, d. MMMM y 'um' HH:mm:ss z");
    assert!(!short.contains("'um'"), "{}", short);
}
