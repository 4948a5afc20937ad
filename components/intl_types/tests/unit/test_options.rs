//! Option bag decoding tests

use intl_types::{CurrencyDisplay, IntlError, NumberFormatOptions, NumberStyle};

#[test]
fn test_decode_full_option_bag() {
    let options = NumberFormatOptions::from_json(
        r#"{
            "style": "currency",
            "currency": "EUR",
            "currencyDisplay": "narrowSymbol",
            "useGrouping": false,
            "minimumIntegerDigits": 3,
            "minimumFractionDigits": 1,
            "maximumFractionDigits": 4
        }"#,
    )
    .unwrap();

    assert_eq!(options.style, Some(NumberStyle::Currency));
    assert_eq!(options.currency.as_deref(), Some("EUR"));
    assert_eq!(options.currency_display, Some(CurrencyDisplay::NarrowSymbol));
    assert_eq!(options.use_grouping, Some(false));
    assert_eq!(options.minimum_integer_digits, Some(3));
    assert_eq!(options.minimum_fraction_digits, Some(1));
    assert_eq!(options.maximum_fraction_digits, Some(4));
}

#[test]
fn test_decode_empty_bag_leaves_everything_unset() {
    let options = NumberFormatOptions::from_json("{}").unwrap();
    assert_eq!(options, NumberFormatOptions::default());
}

#[test]
fn test_unknown_style_decodes_as_decimal() {
    let options = NumberFormatOptions::from_json(r#"{"style": "unit"}"#).unwrap();
    assert_eq!(options.style, Some(NumberStyle::Decimal));
}

#[test]
fn test_mixed_case_style_decodes() {
    let options = NumberFormatOptions::from_json(r#"{"style": "Percent"}"#).unwrap();
    assert_eq!(options.effective_style(), NumberStyle::Percent);
}

#[test]
fn test_negative_digit_count_is_rejected_by_decoder() {
    let result = NumberFormatOptions::from_json(r#"{"minimumFractionDigits": -1}"#);
    assert!(matches!(result, Err(IntlError::InvalidOptions(_))));
}

#[test]
fn test_malformed_json_is_invalid_options() {
    let result = NumberFormatOptions::from_json("{style:");
    assert!(matches!(result, Err(IntlError::InvalidOptions(_))));
}
