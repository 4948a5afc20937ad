//! Date/time patterns and rendering through `java.text.DateFormat`.

use chrono::{DateTime, Utc};
use intl_types::{IntlResult, PatternDefinition};
use native_engines::jdk::{constant_for_style, JavaTextEngine, Locale};
use tracing::trace;

use crate::date_style::{DateStyleCase, StyleSelection};
use crate::locale::LocaleResolver;
use crate::platform::given;

pub(super) fn native_pattern(
    engine: &JavaTextEngine,
    locales: &LocaleResolver<Locale>,
    definition: &PatternDefinition,
    locale: Option<&str>,
) -> IntlResult<String> {
    let case = DateStyleCase::classify(definition, locale);
    let native_locale = given(locale)
        .filter(|_| case.uses_locale())
        .map(|tag| locales.resolve(Some(tag)));
    let native_locale = native_locale.as_deref();
    trace!(case = case.index(), ?locale, "resolved date style case");

    let format = match case.selection(definition) {
        StyleSelection::DateTime { date, time } => engine.get_date_time_instance(
            constant_for_style(date),
            constant_for_style(time),
            native_locale,
        )?,
        StyleSelection::Date(style) => engine.get_date_instance(constant_for_style(style), native_locale)?,
        StyleSelection::Time(style) => engine.get_time_instance(constant_for_style(style), native_locale)?,
    };
    Ok(format.to_pattern().to_string())
}

pub(super) fn format_native(
    engine: &JavaTextEngine,
    locales: &LocaleResolver<Locale>,
    pattern: &str,
    locale: Option<&str>,
    date: Option<DateTime<Utc>>,
) -> IntlResult<String> {
    let native_locale = given(locale).map(|tag| locales.resolve(Some(tag)));
    let format = engine.simple_date_format(pattern, native_locale.as_deref())?;
    Ok(format.format(&date.unwrap_or_else(Utc::now)))
}
