//! `java.text.DateFormat` style constants and `java.text.SimpleDateFormat`

use chrono::{DateTime, Utc};
use intl_types::{DateTimeStyle, IntlResult};

use super::Locale;
use crate::date_pattern::{self, DateToken, PatternMode};
use crate::locale_data::LocaleData;

/// `DateFormat.FULL`
pub const FULL: i32 = 0;
/// `DateFormat.LONG`
pub const LONG: i32 = 1;
/// `DateFormat.MEDIUM`
pub const MEDIUM: i32 = 2;
/// `DateFormat.SHORT`
pub const SHORT: i32 = 3;
/// `DateFormat.DEFAULT`
pub const DEFAULT: i32 = MEDIUM;

/// Map a `DateFormat` style constant onto a style level
///
/// Values outside `0..=3` are treated as `DEFAULT`.
pub fn style_from_constant(style: i32) -> DateTimeStyle {
    match style {
        FULL => DateTimeStyle::Full,
        LONG => DateTimeStyle::Long,
        SHORT => DateTimeStyle::Short,
        _ => DateTimeStyle::Medium,
    }
}

/// The `DateFormat` constant for a style level
pub fn constant_for_style(style: DateTimeStyle) -> i32 {
    match style {
        DateTimeStyle::Full => FULL,
        DateTimeStyle::Long => LONG,
        DateTimeStyle::Medium => MEDIUM,
        DateTimeStyle::Short => SHORT,
    }
}

/// The pattern `DateFormat.getDateTimeInstance` and friends produce
pub(crate) fn style_pattern(
    data: &LocaleData,
    date: Option<DateTimeStyle>,
    time: Option<DateTimeStyle>,
) -> String {
    let date = date.map(|style| data.date_patterns[style.index()]);
    let time = time.map(|style| data.time_patterns[style.index()]);
    match (date, time) {
        (Some(date), Some(time)) => format!("{date} {time}"),
        (Some(date), None) => date.to_string(),
        (None, Some(time)) => time.to_string(),
        (None, None) => String::new(),
    }
}

/// A date format built from an explicit pattern
///
/// Unknown pattern letters are rejected when the format is built.
#[derive(Debug, Clone)]
pub struct SimpleDateFormat {
    pattern: String,
    tokens: Vec<DateToken>,
    data: &'static LocaleData,
}

impl SimpleDateFormat {
    /// `new SimpleDateFormat(pattern, locale)`
    ///
    /// # Errors
    /// [`intl_types::IntlError::MalformedDatePattern`] for unknown letters or
    /// an unterminated quote.
    pub fn new(pattern: &str, locale: &Locale) -> IntlResult<Self> {
        Ok(SimpleDateFormat {
            pattern: pattern.to_string(),
            tokens: date_pattern::tokenize(pattern, PatternMode::Strict)?,
            data: locale.data(),
        })
    }

    /// `toPattern`
    pub fn to_pattern(&self) -> &str {
        &self.pattern
    }

    /// Render `date` (in UTC)
    pub fn format(&self, date: &DateTime<Utc>) -> String {
        date_pattern::render(&self.tokens, self.data.names, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_style_constants() {
        assert_eq!(style_from_constant(FULL), DateTimeStyle::Full);
        assert_eq!(style_from_constant(LONG), DateTimeStyle::Long);
        assert_eq!(style_from_constant(SHORT), DateTimeStyle::Short);
        assert_eq!(style_from_constant(DEFAULT), DateTimeStyle::Medium);
        assert_eq!(style_from_constant(42), DateTimeStyle::Medium);
        assert_eq!(constant_for_style(DateTimeStyle::Short), SHORT);
        assert_eq!(constant_for_style(DateTimeStyle::Full), FULL);
    }

    #[test]
    fn test_style_pattern_glues_with_space() {
        let data = Locale::us().data();
        let pattern = style_pattern(data, Some(DateTimeStyle::Short), Some(DateTimeStyle::Long));
        assert_eq!(pattern, "M/d/yy h:mm:ss a z");
        assert_eq!(style_pattern(data, None, None), "");
    }

    #[test]
    fn test_simple_date_format_renders_in_locale() {
        let format = SimpleDateFormat::new("EEEE d MMMM y", &Locale::with_country("de", "DE")).unwrap();
        let date = Utc.with_ymd_and_hms(2044, 4, 12, 0, 0, 0).unwrap();
        assert_eq!(format.format(&date), "Dienstag 12 April 2044");
        assert_eq!(format.to_pattern(), "EEEE d MMMM y");
    }

    #[test]
    fn test_simple_date_format_is_strict() {
        assert!(SimpleDateFormat::new("yyyy-QQQ", &Locale::us()).is_err());
    }
}
