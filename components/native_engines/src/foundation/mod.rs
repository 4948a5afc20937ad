//! Foundation-style formatting engine
//!
//! Formatters are created empty and configured property by property, the
//! way `NSNumberFormatter` and `NSDateFormatter` are. Unlike the `jdk`
//! engine nothing here fails on unknown currencies or pattern letters.

mod date;
mod locale;
mod number;

pub use date::{DateFormatter, FormatterStyle};
pub use locale::NsLocale;
pub use number::{NumberFormatter, NumberFormatterStyle};

/// The Foundation engine of one device
#[derive(Debug, Clone, Default)]
pub struct FoundationEngine {
    current_locale: NsLocale,
}

impl FoundationEngine {
    /// Engine whose current locale is `en_US`
    pub fn new() -> Self {
        FoundationEngine::default()
    }

    /// Engine with another current locale
    pub fn with_current_locale(locale: NsLocale) -> Self {
        FoundationEngine {
            current_locale: locale,
        }
    }

    /// `[NSLocale currentLocale]`
    pub fn current_locale(&self) -> &NsLocale {
        &self.current_locale
    }

    /// A fresh number formatter in the current locale
    pub fn number_formatter(&self) -> NumberFormatter {
        let mut formatter = NumberFormatter::new();
        formatter.set_locale(self.current_locale.clone());
        formatter
    }

    /// A fresh date formatter in the current locale
    pub fn date_formatter(&self) -> DateFormatter {
        let mut formatter = DateFormatter::new();
        formatter.set_locale(self.current_locale.clone());
        formatter
    }
}
