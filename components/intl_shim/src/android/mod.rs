//! The Android realization, on the `java.text` engine.
//!
//! Number renderings go through the grouping separator correction; see
//! [`crate::grouping`].

mod date_time;
mod number;

use chrono::{DateTime, Utc};
use intl_types::{IntlResult, NumberFormatOptions, PatternDefinition};
use native_engines::jdk::{JavaTextEngine, Locale};

use crate::locale::LocaleResolver;
use crate::platform::IntlPlatform;

pub use number::AndroidNumberFormat;

/// Formatting on a `java.text` engine
#[derive(Debug, Default)]
pub struct AndroidIntl {
    engine: JavaTextEngine,
    locales: LocaleResolver<Locale>,
}

impl AndroidIntl {
    /// Platform over a default engine (`en_US`, no defects)
    pub fn new() -> Self {
        AndroidIntl::default()
    }

    /// Platform over a given engine
    pub fn with_engine(engine: JavaTextEngine) -> Self {
        AndroidIntl {
            engine,
            locales: LocaleResolver::new(),
        }
    }

    /// The engine
    pub fn engine(&self) -> &JavaTextEngine {
        &self.engine
    }

    /// The locale cache
    pub fn locales(&self) -> &LocaleResolver<Locale> {
        &self.locales
    }
}

impl IntlPlatform for AndroidIntl {
    type NumberFormat = AndroidNumberFormat;

    fn name(&self) -> &'static str {
        "android"
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
