//! `java.util.Locale`

use std::fmt;

use crate::locale_data::{self, LocaleData};

/// A language with an optional country, as `java.util.Locale` models it.
///
/// Nothing is validated: `Locale::new("")` is a legal (root) locale, and a
/// country of `""` means "no country".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
}

impl Locale {
    /// A language-only locale
    pub fn new(language: &str) -> Self {
        Locale {
            language: language.to_ascii_lowercase(),
            country: String::new(),
        }
    }

    /// A language + country locale
    pub fn with_country(language: &str, country: &str) -> Self {
        Locale {
            language: language.to_ascii_lowercase(),
            country: country.to_ascii_uppercase(),
        }
    }

    /// `Locale.US`
    pub fn us() -> Self {
        Locale::with_country("en", "US")
    }

    /// Language subtag, lowercase
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Country subtag, uppercase; empty when absent
    pub fn country(&self) -> &str {
        &self.country
    }

    /// `en-US` style tag; `und` for the root locale
    pub fn to_language_tag(&self) -> String {
        let language = if self.language.is_empty() {
            "und"
        } else {
            self.language.as_str()
        };
        if self.country.is_empty() {
            language.to_string()
        } else {
            format!("{}-{}", language, self.country)
        }
    }

    pub(crate) fn region(&self) -> Option<&str> {
        Some(self.country.as_str()).filter(|c| !c.is_empty())
    }

    pub(crate) fn data(&self) -> &'static LocaleData {
        locale_data::lookup(&self.language, self.region())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::us()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            write!(f, "{}", self.language)
        } else {
            write!(f, "{}_{}", self.language, self.country)
        }
    }
}
