//! Locale cache integration tests
//!
//! Both native locale kinds behind the same resolver.

use std::sync::Arc;

use intl_shim::{LocaleResolver, NativeLocale};
use native_engines::foundation::NsLocale;
use native_engines::jdk::Locale;

fn identity_and_default<L: NativeLocale + PartialEq + std::fmt::Debug>() {
    let resolver = LocaleResolver::<L>::new();

    for tag in ["en-US", "de_DE", "fr", "zh-Hant-TW", "xx-YY"] {
        let first = resolver.resolve(Some(tag));
        let second = resolver.resolve(Some(tag));
        assert!(Arc::ptr_eq(&first, &second), "{}", tag);
    }

    let default = resolver.resolve(None);
    assert!(Arc::ptr_eq(&default, &resolver.resolve(None)));
    assert_eq!(*default, *resolver.resolve(Some("en-US")));
}

/// Test: java.text locales are cached and default to en-US
#[test]
fn test_java_locale_cache() {
    identity_and_default::<Locale>();
}

/// Test: Foundation locales are cached and default to en_US
#[test]
fn test_foundation_locale_cache() {
    identity_and_default::<NsLocale>();
}

/// Test: distinct tags with the same content are separate entries
#[test]
fn test_tags_are_cached_verbatim() {
    let resolver = LocaleResolver::<Locale>::new();
    let hyphen = resolver.resolve(Some("de-DE"));
    let underscore = resolver.resolve(Some("de_DE"));

    assert_eq!(*hyphen, *underscore);
    assert!(!Arc::ptr_eq(&hyphen, &underscore));
    assert_eq!(resolver.len(), 2);
}
