//! Date/time decision table, exercised through the public API

use intl_shim::{AndroidIntl, DateStyleCase, IntlPlatform, IosIntl, StyleSelection};
use intl_types::{DateTimeStyle, IntlResult, PatternDefinition};

type PatternFn = fn(&PatternDefinition) -> IntlResult<String>;

#[test]
fn test_no_input_is_always_the_default_case() {
    let platform = AndroidIntl::new();
    let first = platform.native_date_pattern(&PatternDefinition::none(), None).unwrap();
    platform
        .native_date_pattern(&PatternDefinition::date("short"), Some("de-DE"))
        .unwrap();
    let again = platform.native_date_pattern(&PatternDefinition::none(), None).unwrap();
    assert_eq!(first, again);
    assert_eq!(
        DateStyleCase::classify(&PatternDefinition::none(), None),
        DateStyleCase::Default
    );
}

#[test]
fn test_full_and_short_dates_differ_for_fr_fr() {
    let platforms: [PatternFn; 2] = [
        |d| AndroidIntl::new().native_date_pattern(d, Some("fr-FR")),
        |d| IosIntl::new().native_date_pattern(d, Some("fr-FR")),
    ];
    for platform_pattern in platforms {
        let full = platform_pattern(&PatternDefinition::date("full")).unwrap();
        let short = platform_pattern(&PatternDefinition::date("short")).unwrap();
        assert_eq!(full, "EEEE d MMMM y");
        assert_eq!(short, "dd/MM/y");
    }
}

#[test]
fn test_time_granularity_is_ignored() {
    let android = AndroidIntl::new();
    let ios = IosIntl::new();
    let expected_android = android
        .native_date_pattern(&PatternDefinition::time("long"), Some("en-GB"))
        .unwrap();
    let expected_ios = ios
        .native_date_pattern(&PatternDefinition::time("long"), Some("en-GB"))
        .unwrap();

    for granularity in ["short", "medium", "full", "2-digit"] {
        let definition = PatternDefinition::time(granularity);
        assert_eq!(
            android.native_date_pattern(&definition, Some("en-GB")).unwrap(),
            expected_android
        );
        assert_eq!(ios.native_date_pattern(&definition, Some("en-GB")).unwrap(), expected_ios);
    }
    assert_eq!(expected_android, "HH:mm:ss z");
}

#[test]
fn test_date_time_selection_from_json_definition() {
    let definition: PatternDefinition =
        serde_json::from_str(r#"{"date": "full", "time": true}"#).unwrap();
    let case = DateStyleCase::classify(&definition, Some("es"));
    assert_eq!(case, DateStyleCase::DateAndTimeWithLocale);
    assert_eq!(
        case.selection(&definition),
        StyleSelection::DateTime {
            date: DateTimeStyle::Full,
            time: DateTimeStyle::Long
        }
    );
}
