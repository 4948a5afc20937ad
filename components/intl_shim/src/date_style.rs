//! The date/time style decision table.
//!
//! A pattern request is classified by which of locale, date and time are
//! present. Each of the eight combinations maps to a fixed style selection;
//! only the date style reacts to the request (full or short), the time style
//! is always long.

use intl_types::{DateTimeStyle, PatternDefinition};

/// Which inputs a pattern request carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateStyleCase {
    /// No locale, no date, no time
    Default,
    /// Locale only
    LocaleOnly,
    /// Date only
    DateOnly,
    /// Date with a locale
    DateWithLocale,
    /// Time only
    TimeOnly,
    /// Time with a locale
    TimeWithLocale,
    /// Date and time
    DateAndTime,
    /// Date and time with a locale
    DateAndTimeWithLocale,
}

/// The native styles a case asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSelection {
    /// A combined date and time pattern
    DateTime {
        /// Date style
        date: DateTimeStyle,
        /// Time style
        time: DateTimeStyle,
    },
    /// A date pattern
    Date(DateTimeStyle),
    /// A time pattern
    Time(DateTimeStyle),
}

impl DateStyleCase {
    /// Classify a request; an empty locale tag counts as no locale
    ///
    /// ```
    /// use intl_shim::DateStyleCase;
    /// use intl_types::PatternDefinition;
    ///
    /// let case = DateStyleCase::classify(&PatternDefinition::date("full"), Some("fr-FR"));
    /// assert_eq!(case, DateStyleCase::DateWithLocale);
    /// assert_eq!(case.index(), 3);
    /// ```
    pub fn classify(definition: &PatternDefinition, locale: Option<&str>) -> Self {
        let has_locale = locale.is_some_and(|tag| !tag.is_empty());
        match (has_locale, definition.has_date(), definition.has_time()) {
            (false, false, false) => DateStyleCase::Default,
            (true, false, false) => DateStyleCase::LocaleOnly,
            (false, true, false) => DateStyleCase::DateOnly,
            (true, true, false) => DateStyleCase::DateWithLocale,
            (false, false, true) => DateStyleCase::TimeOnly,
            (true, false, true) => DateStyleCase::TimeWithLocale,
            (false, true, true) => DateStyleCase::DateAndTime,
            (true, true, true) => DateStyleCase::DateAndTimeWithLocale,
        }
    }

    /// Position in the table: locale adds 1, date 2, time 4
    pub fn index(self) -> u8 {
        match self {
            DateStyleCase::Default => 0,
            DateStyleCase::LocaleOnly => 1,
            DateStyleCase::DateOnly => 2,
            DateStyleCase::DateWithLocale => 3,
            DateStyleCase::TimeOnly => 4,
            DateStyleCase::TimeWithLocale => 5,
            DateStyleCase::DateAndTime => 6,
            DateStyleCase::DateAndTimeWithLocale => 7,
        }
    }

    /// True when the given locale is used rather than the default one
    pub fn uses_locale(self) -> bool {
        self.index() % 2 == 1
    }

    /// The styles this case selects for `definition`
    pub fn selection(self, definition: &PatternDefinition) -> StyleSelection {
        let date = if definition.wants_full_date() {
            DateTimeStyle::Full
        } else {
            DateTimeStyle::Short
        };
        match self {
            DateStyleCase::Default => StyleSelection::DateTime {
                date: DateTimeStyle::Full,
                time: DateTimeStyle::Full,
            },
            DateStyleCase::LocaleOnly => StyleSelection::DateTime {
                date: DateTimeStyle::Short,
                time: DateTimeStyle::Short,
            },
            DateStyleCase::DateOnly | DateStyleCase::DateWithLocale => StyleSelection::Date(date),
            DateStyleCase::TimeOnly | DateStyleCase::TimeWithLocale => {
                StyleSelection::Time(DateTimeStyle::Long)
            }
            DateStyleCase::DateAndTime | DateStyleCase::DateAndTimeWithLocale => {
                StyleSelection::DateTime {
                    date,
                    time: DateTimeStyle::Long,
                }
            }
        }
    }
}
