//! `NSDateFormatter`

use chrono::{DateTime, Utc};
use intl_types::DateTimeStyle;

use super::NsLocale;
use crate::date_pattern::{self, DateToken, PatternMode};

/// `NSDateFormatterStyle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatterStyle {
    /// `NSDateFormatterNoStyle`
    #[default]
    None,
    /// `NSDateFormatterShortStyle`
    Short,
    /// `NSDateFormatterMediumStyle`
    Medium,
    /// `NSDateFormatterLongStyle`
    Long,
    /// `NSDateFormatterFullStyle`
    Full,
}

impl FormatterStyle {
    fn level(self) -> Option<DateTimeStyle> {
        match self {
            FormatterStyle::None => None,
            FormatterStyle::Short => Some(DateTimeStyle::Short),
            FormatterStyle::Medium => Some(DateTimeStyle::Medium),
            FormatterStyle::Long => Some(DateTimeStyle::Long),
            FormatterStyle::Full => Some(DateTimeStyle::Full),
        }
    }
}

impl From<DateTimeStyle> for FormatterStyle {
    fn from(style: DateTimeStyle) -> Self {
        match style {
            DateTimeStyle::Full => FormatterStyle::Full,
            DateTimeStyle::Long => FormatterStyle::Long,
            DateTimeStyle::Medium => FormatterStyle::Medium,
            DateTimeStyle::Short => FormatterStyle::Short,
        }
    }
}

/// A date formatter driven either by styles or by an explicit format
///
/// ```
/// use native_engines::foundation::{DateFormatter, FormatterStyle, NsLocale};
///
/// let mut formatter = DateFormatter::new();
/// formatter.set_locale(NsLocale::with_identifier("fr_FR"));
/// formatter.set_date_style(FormatterStyle::Full);
/// formatter.set_time_style(FormatterStyle::Long);
/// assert_eq!(formatter.date_format(), "EEEE d MMMM y 'à' HH:mm:ss z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFormatter {
    locale: NsLocale,
    date_style: FormatterStyle,
    time_style: FormatterStyle,
    explicit_format: Option<String>,
}

impl DateFormatter {
    /// `[NSDateFormatter new]`: current locale, no styles
    pub fn new() -> Self {
        DateFormatter::default()
    }

    /// The formatter's locale
    pub fn locale(&self) -> &NsLocale {
        &self.locale
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: NsLocale) {
        self.locale = locale;
    }

    /// Set `dateStyle`; clears any explicit format
    pub fn set_date_style(&mut self, style: FormatterStyle) {
        self.date_style = style;
        self.explicit_format = None;
    }

    /// Set `timeStyle`; clears any explicit format
    pub fn set_time_style(&mut self, style: FormatterStyle) {
        self.time_style = style;
        self.explicit_format = None;
    }

    /// `dateFormat`: the explicit format, or one derived from the styles
    pub fn date_format(&self) -> String {
        if let Some(format) = &self.explicit_format {
            return format.clone();
        }

        let data = self.locale.data();
        let date = self.date_style.level();
        let time = self.time_style.level();
        match (date, time) {
            (Some(date), Some(time)) => {
                let glue = match date {
                    DateTimeStyle::Full | DateTimeStyle::Long => data.date_time_glue[0],
                    DateTimeStyle::Medium | DateTimeStyle::Short => data.date_time_glue[1],
                };
                glue.replace("{1}", data.date_patterns[date.index()])
                    .replace("{0}", data.time_patterns[time.index()])
            }
            (Some(date), None) => data.date_patterns[date.index()].to_string(),
            (None, Some(time)) => data.time_patterns[time.index()].to_string(),
            (None, None) => String::new(),
        }
    }

    /// Set `dateFormat`
    pub fn set_date_format(&mut self, format: &str) {
        self.explicit_format = Some(format.to_string());
    }

    /// `stringFromDate:`; unknown pattern letters are emitted as-is
    pub fn string_from_date(&self, date: &DateTime<Utc>) -> String {
        let format = self.date_format();
        let tokens = date_pattern::tokenize(&format, PatternMode::Lenient)
            .unwrap_or_else(|_| vec![DateToken::Literal(format.clone())]);
        date_pattern::render(&tokens, self.locale.data().names, date)
    }
}
