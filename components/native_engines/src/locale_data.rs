//! Static per-locale formatting data.
//!
//! A deliberately small table: enough locales to exercise grouping, decimal
//! and currency placement differences, not a locale database. Lookups fall
//! back from `(language, region)` to `language` to the root (`en`) entry.

/// Month, weekday, day period and era names for one language
#[derive(Debug)]
pub struct CalendarNames {
    /// Wide month names, January first
    pub months_wide: [&'static str; 12],
    /// Abbreviated month names, January first
    pub months_abbr: [&'static str; 12],
    /// Wide weekday names, Sunday first
    pub weekdays_wide: [&'static str; 7],
    /// Abbreviated weekday names, Sunday first
    pub weekdays_abbr: [&'static str; 7],
    /// AM / PM markers
    pub day_periods: [&'static str; 2],
    /// BC / AD era names
    pub eras: [&'static str; 2],
}

/// Formatting data for one locale
#[derive(Debug)]
pub struct LocaleData {
    /// Language subtag
    pub language: &'static str,
    /// Region subtag, `None` for the language-level entry
    pub region: Option<&'static str>,
    /// Digit grouping separator
    pub grouping_separator: char,
    /// Decimal separator
    pub decimal_separator: char,
    /// Percent sign
    pub percent_sign: char,
    /// Minus sign
    pub minus_sign: char,
    /// Decimal number pattern
    pub decimal_pattern: &'static str,
    /// Percent pattern
    pub percent_pattern: &'static str,
    /// Currency pattern
    pub currency_pattern: &'static str,
    /// Date patterns: full, long, medium, short
    pub date_patterns: [&'static str; 4],
    /// Time patterns: full, long, medium, short
    pub time_patterns: [&'static str; 4],
    /// Date-time glue: `[full/long date, medium/short date]`, `{1}` date, `{0}` time
    pub date_time_glue: [&'static str; 2],
    /// Calendar names
    pub names: &'static CalendarNames,
}

const EN_NAMES: CalendarNames = CalendarNames {
    months_wide: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    months_abbr: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun",
        "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays_wide: [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    weekdays_abbr: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    day_periods: ["AM", "PM"],
    eras: ["BC", "AD"],
};

const FR_NAMES: CalendarNames = CalendarNames {
    months_wide: [
        "janvier", "février", "mars", "avril", "mai", "juin",
        "juillet", "août", "septembre", "octobre", "novembre", "décembre",
    ],
    months_abbr: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin",
        "juil.", "août", "sept.", "oct.", "nov.", "déc.",
    ],
    weekdays_wide: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    weekdays_abbr: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    day_periods: ["AM", "PM"],
    eras: ["av. J.-C.", "ap. J.-C."],
};

const DE_NAMES: CalendarNames = CalendarNames {
    months_wide: [
        "Januar", "Februar", "März", "April", "Mai", "Juni",
        "Juli", "August", "September", "Oktober", "November", "Dezember",
    ],
    months_abbr: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni",
        "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
    ],
    weekdays_wide: [
        "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
    ],
    weekdays_abbr: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    day_periods: ["AM", "PM"],
    eras: ["v. Chr.", "n. Chr."],
};

const ES_NAMES: CalendarNames = CalendarNames {
    months_wide: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio",
        "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
    ],
    months_abbr: [
        "ene", "feb", "mar", "abr", "may", "jun",
        "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays_wide: [
        "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
    ],
    weekdays_abbr: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    day_periods: ["a.\u{a0}m.", "p.\u{a0}m."],
    eras: ["a. C.", "d. C."],
};

const IT_NAMES: CalendarNames = CalendarNames {
    months_wide: [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno",
        "luglio", "agosto", "settembre", "ottobre", "novembre", "dicembre",
    ],
    months_abbr: [
        "gen", "feb", "mar", "apr", "mag", "giu",
        "lug", "ago", "set", "ott", "nov", "dic",
    ],
    weekdays_wide: [
        "domenica", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
    ],
    weekdays_abbr: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
    day_periods: ["AM", "PM"],
    eras: ["a.C.", "d.C."],
};

const PT_NAMES: CalendarNames = CalendarNames {
    months_wide: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho",
        "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
    ],
    months_abbr: [
        "jan.", "fev.", "mar.", "abr.", "mai.", "jun.",
        "jul.", "ago.", "set.", "out.", "nov.", "dez.",
    ],
    weekdays_wide: [
        "domingo", "segunda-feira", "terça-feira", "quarta-feira",
        "quinta-feira", "sexta-feira", "sábado",
    ],
    weekdays_abbr: ["dom.", "seg.", "ter.", "qua.", "qui.", "sex.", "sáb."],
    day_periods: ["AM", "PM"],
    eras: ["a.C.", "d.C."],
};

const EN_DATES: [&str; 4] = ["EEEE, MMMM d, y", "MMMM d, y", "MMM d, y", "M/d/yy"];
const EN_TIMES: [&str; 4] = ["h:mm:ss a zzzz", "h:mm:ss a z", "h:mm:ss a", "h:mm a"];
const H24_TIMES: [&str; 4] = ["HH:mm:ss zzzz", "HH:mm:ss z", "HH:mm:ss", "HH:mm"];
const EN_GLUE: [&str; 2] = ["{1} 'at' {0}", "{1}, {0}"];

const FR_DATES: [&str; 4] = ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"];
const DE_DATES: [&str; 4] = ["EEEE, d. MMMM y", "d. MMMM y", "dd.MM.y", "dd.MM.yy"];
const ES_DATES: [&str; 4] = [
    "EEEE, d 'de' MMMM 'de' y",
    "d 'de' MMMM 'de' y",
    "d MMM y",
    "d/M/yy",
];
const PT_DATES: [&str; 4] = [
    "EEEE, d 'de' MMMM 'de' y",
    "d 'de' MMMM 'de' y",
    "d 'de' MMM 'de' y",
    "dd/MM/y",
];

const ROOT_DATA: LocaleData = LocaleData {
    language: "en",
    region: None,
    grouping_separator: ',',
    decimal_separator: '.',
    percent_sign: '%',
    minus_sign: '-',
    decimal_pattern: "#,##0.###",
    percent_pattern: "#,##0%",
    currency_pattern: "¤#,##0.00",
    date_patterns: EN_DATES,
    time_patterns: EN_TIMES,
    date_time_glue: EN_GLUE,
    names: &EN_NAMES,
};

/// The root entry, used when nothing more specific matches
pub static ROOT: LocaleData = ROOT_DATA;

static LOCALES: &[LocaleData] = &[
    LocaleData {
        region: Some("US"),
        ..ROOT_DATA
    },
    LocaleData {
        region: Some("GB"),
        date_patterns: ["EEEE, d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"],
        time_patterns: H24_TIMES,
        ..ROOT_DATA
    },
    LocaleData {
        region: Some("BE"),
        grouping_separator: '.',
        decimal_separator: ',',
        currency_pattern: "#,##0.00\u{a0}¤",
        date_patterns: ["EEEE, d MMMM y", "d MMMM y", "d MMM y", "dd/MM/yy"],
        time_patterns: H24_TIMES,
        ..ROOT_DATA
    },
    LocaleData {
        language: "fr",
        region: None,
        grouping_separator: '\u{202f}',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0\u{a0}%",
        currency_pattern: "#,##0.00\u{a0}¤",
        date_patterns: FR_DATES,
        time_patterns: H24_TIMES,
        date_time_glue: ["{1} 'à' {0}", "{1} {0}"],
        names: &FR_NAMES,
    },
    LocaleData {
        language: "fr",
        region: Some("FR"),
        grouping_separator: '\u{202f}',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0\u{a0}%",
        currency_pattern: "#,##0.00\u{a0}¤",
        date_patterns: FR_DATES,
        time_patterns: H24_TIMES,
        date_time_glue: ["{1} 'à' {0}", "{1} {0}"],
        names: &FR_NAMES,
    },
    LocaleData {
        language: "de",
        region: None,
        grouping_separator: '.',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0\u{a0}%",
        currency_pattern: "#,##0.00\u{a0}¤",
        date_patterns: DE_DATES,
        time_patterns: H24_TIMES,
        date_time_glue: ["{1} 'um' {0}", "{1}, {0}"],
        names: &DE_NAMES,
    },
    LocaleData {
        language: "de",
        region: Some("DE"),
        grouping_separator: '.',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0\u{a0}%",
        currency_pattern: "#,##0.00\u{a0}¤",
        date_patterns: DE_DATES,
        time_patterns: H24_TIMES,
        date_time_glue: ["{1} 'um' {0}", "{1}, {0}"],
        names: &DE_NAMES,
    },
    LocaleData {
        language: "es",
        region: None,
        grouping_separator: '.',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0\u{a0}%",
        currency_pattern: "#,##0.00\u{a0}¤",
        date_patterns: ES_DATES,
        time_patterns: ["H:mm:ss (zzzz)", "H:mm:ss z", "H:mm:ss", "H:mm"],
        date_time_glue: ["{1}, {0}", "{1}, {0}"],
        names: &ES_NAMES,
    },
    LocaleData {
        language: "es",
        region: Some("ES"),
        grouping_separator: '.',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0\u{a0}%",
        currency_pattern: "#,##0.00\u{a0}¤",
        date_patterns: ES_DATES,
        time_patterns: ["H:mm:ss (zzzz)", "H:mm:ss z", "H:mm:ss", "H:mm"],
        date_time_glue: ["{1}, {0}", "{1}, {0}"],
        names: &ES_NAMES,
    },
    LocaleData {
        language: "it",
        region: None,
        grouping_separator: '.',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0%",
        currency_pattern: "#,##0.00\u{a0}¤",
        date_patterns: ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/yy"],
        time_patterns: H24_TIMES,
        date_time_glue: ["{1} {0}", "{1}, {0}"],
        names: &IT_NAMES,
    },
    LocaleData {
        language: "pt",
        region: None,
        grouping_separator: '.',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0%",
        currency_pattern: "¤\u{a0}#,##0.00",
        date_patterns: PT_DATES,
        time_patterns: H24_TIMES,
        date_time_glue: ["{1} {0}", "{1} {0}"],
        names: &PT_NAMES,
    },
    LocaleData {
        language: "pt",
        region: Some("BR"),
        grouping_separator: '.',
        decimal_separator: ',',
        percent_sign: '%',
        minus_sign: '-',
        decimal_pattern: "#,##0.###",
        percent_pattern: "#,##0%",
        currency_pattern: "¤\u{a0}#,##0.00",
        date_patterns: PT_DATES,
        time_patterns: H24_TIMES,
        date_time_glue: ["{1} {0}", "{1} {0}"],
        names: &PT_NAMES,
    },
];

/// Find the best entry for a language and optional region
///
/// Matching ignores case. Unknown languages get the root entry.
pub fn lookup(language: &str, region: Option<&str>) -> &'static LocaleData {
    let language_matches = |data: &&LocaleData| data.language.eq_ignore_ascii_case(language);

    if let Some(region) = region.filter(|r| !r.is_empty()) {
        let exact = LOCALES.iter().filter(language_matches).find(|data| {
            data.region
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(region))
        });
        if let Some(data) = exact {
            return data;
        }
    }

    LOCALES
        .iter()
        .filter(language_matches)
        .find(|data| data.region.is_none())
        .unwrap_or(&ROOT)
}

/// Every entry, root first
pub fn all() -> impl Iterator<Item = &'static LocaleData> {
    std::iter::once(&ROOT).chain(LOCALES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_region() {
        let data = lookup("en", Some("BE"));
        assert_eq!(data.grouping_separator, '.');
        assert_eq!(data.decimal_separator, ',');
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let data = lookup("DE", Some("de"));
        assert_eq!(data.region, Some("DE"));
    }

    #[test]
    fn test_lookup_falls_back_to_language() {
        let data = lookup("fr", Some("CA"));
        assert_eq!(data.language, "fr");
        assert_eq!(data.region, None);
    }

    #[test]
    fn test_lookup_unknown_language_is_root() {
        let data = lookup("xx", Some("YY"));
        assert!(std::ptr::eq(data, &ROOT));
    }

    #[test]
    fn test_empty_region_is_language_level() {
        let data = lookup("en", Some(""));
        assert!(std::ptr::eq(data, &ROOT));
    }
}
