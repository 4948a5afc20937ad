//! Date/time patterns and rendering through `NSDateFormatter`.

use chrono::{DateTime, Utc};
use intl_types::{IntlResult, PatternDefinition};
use native_engines::foundation::{FormatterStyle, FoundationEngine, NsLocale};
use tracing::trace;

use crate::date_style::{DateStyleCase, StyleSelection};
use crate::locale::LocaleResolver;
use crate::platform::given;

pub(super) fn native_pattern(
    engine: &FoundationEngine,
    locales: &LocaleResolver<NsLocale>,
    definition: &PatternDefinition,
    locale: Option<&str>,
) -> IntlResult<String> {
    let case = DateStyleCase::classify(definition, locale);
    trace!(case = case.index(), ?locale, "resolved date style case");

    let mut formatter = engine.date_formatter();
    if case.uses_locale() {
        if let Some(tag) = given(locale) {
            formatter.set_locale(NsLocale::clone(&locales.resolve(Some(tag))));
        }
    }

    match case.selection(definition) {
        StyleSelection::DateTime { date, time } => {
            formatter.set_date_style(FormatterStyle::from(date));
            formatter.set_time_style(FormatterStyle::from(time));
        }
        StyleSelection::Date(style) => formatter.set_date_style(FormatterStyle::from(style)),
        StyleSelection::Time(style) => formatter.set_time_style(FormatterStyle::from(style)),
    }
    Ok(formatter.date_format())
}

pub(super) fn format_native(
    engine: &FoundationEngine,
    locales: &LocaleResolver<NsLocale>,
    pattern: &str,
    locale: Option<&str>,
    date: Option<DateTime<Utc>>,
) -> IntlResult<String> {
    let mut formatter = engine.date_formatter();
    if let Some(tag) = given(locale) {
        formatter.set_locale(NsLocale::clone(&locales.resolve(Some(tag))));
    }
    formatter.set_date_format(pattern);
    Ok(formatter.string_from_date(&date.unwrap_or_else(Utc::now)))
}
