//! The contract both platform realizations implement.

use chrono::{DateTime, Utc};
use intl_types::{IntlResult, NumberFormatOptions, PatternDefinition};

/// A number formatter configured once and then only used for rendering
pub trait NativeNumberFormat: Send + Sync {
    /// Render `value`
    fn format_native(&self, value: f64) -> String;

    /// The engine pattern the formatter ended up with
    fn native_pattern(&self) -> String;
}

/// Date and number formatting on top of one native engine
///
/// Engine failures (unknown currency codes, malformed explicit patterns)
/// are returned as they are; nothing is retried or repaired.
pub trait IntlPlatform: Send + Sync {
    /// The configured number formatter type
    type NumberFormat: NativeNumberFormat;

    /// Short platform name
    fn name(&self) -> &'static str;

    /// The engine's pattern for a `{date?, time?}` request
    fn native_date_pattern(
        &self,
        definition: &PatternDefinition,
        locale: Option<&str>,
    ) -> IntlResult<String>;

    /// Render `date` (now when absent) with an engine pattern
    fn format_date_native(
        &self,
        pattern: &str,
        locale: Option<&str>,
        date: Option<DateTime<Utc>>,
    ) -> IntlResult<String>;

    /// Configure a number formatter
    ///
    /// An explicit `pattern` replaces style selection and the currency code
    /// rewrite.
    fn number_format(
        &self,
        locale: Option<&str>,
        options: &NumberFormatOptions,
        pattern: Option<&str>,
    ) -> IntlResult<Self::NumberFormat>;
}

/// The platform the build target ships with
#[cfg(any(target_os = "ios", target_os = "macos"))]
pub type DefaultPlatform = crate::ios::IosIntl;

/// The platform the build target ships with
#[cfg(not(any(target_os = "ios", target_os = "macos")))]
pub type DefaultPlatform = crate::android::AndroidIntl;

/// Given tags only: absent and empty both mean "use the default"
pub(crate) fn given(locale: Option<&str>) -> Option<&str> {
    locale.filter(|tag| !tag.is_empty())
}

/// Explicit patterns only: an empty pattern counts as none
pub(crate) fn explicit(pattern: Option<&str>) -> Option<&str> {
    pattern.filter(|p| !p.is_empty())
}
