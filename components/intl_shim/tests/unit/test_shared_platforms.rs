//! Platforms shared across threads

use std::sync::Arc;
use std::thread;

use intl_shim::{AndroidIntl, IntlPlatform, IosIntl, NativeNumberFormat};
use intl_types::NumberFormatOptions;

fn render_from_threads<P: IntlPlatform + 'static>(platform: P) -> Vec<String> {
    let platform = Arc::new(platform);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let platform = Arc::clone(&platform);
            thread::spawn(move || {
                let options = NumberFormatOptions::currency("EUR");
                let format = platform.number_format(Some("de-DE"), &options, None).unwrap();
                format.format_native(9876543.21)
            })
        })
        .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_android_from_threads() {
    let results = render_from_threads(AndroidIntl::new());
    assert!(results.iter().all(|r| r == "9.876.543,21\u{a0}€"));
}

#[test]
fn test_ios_from_threads() {
    let results = render_from_threads(IosIntl::new());
    assert!(results.iter().all(|r| r == "9.876.543,21\u{a0}€"));
}

#[test]
fn test_locale_cache_is_shared_by_threads() {
    let platform = Arc::new(AndroidIntl::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let platform = Arc::clone(&platform);
            thread::spawn(move || {
                platform
                    .number_format(Some("it"), &NumberFormatOptions::decimal(), None)
                    .unwrap()
                    .format_native(1.5)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "1,5");
    }
    assert_eq!(platform.locales().len(), 1);
}
