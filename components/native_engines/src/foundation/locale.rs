//! `NSLocale`

use std::fmt;

use crate::locale_data::{self, LocaleData};

/// A locale identified by an `en_US`-style identifier
///
/// Like Foundation, any identifier is accepted; the components are read from
/// the first two `_`/`-` separated segments and the rest is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NsLocale {
    identifier: String,
    language: String,
    region: Option<String>,
}

impl NsLocale {
    /// `[[NSLocale alloc] initWithLocaleIdentifier:]`
    pub fn with_identifier(identifier: &str) -> Self {
        let mut parts = identifier.split(&['_', '-'][..]);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts
            .next()
            .filter(|region| !region.is_empty())
            .map(|region| region.to_ascii_uppercase());
        NsLocale {
            identifier: identifier.to_string(),
            language,
            region,
        }
    }

    /// The locale of a device configured for US English
    pub fn current() -> Self {
        NsLocale::with_identifier("en_US")
    }

    /// The identifier exactly as given
    pub fn locale_identifier(&self) -> &str {
        &self.identifier
    }

    /// Language code
    pub fn language_code(&self) -> &str {
        &self.language
    }

    /// Region code, if any
    pub fn country_code(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub(crate) fn data(&self) -> &'static LocaleData {
        locale_data::lookup(&self.language, self.country_code())
    }
}

impl Default for NsLocale {
    fn default() -> Self {
        NsLocale::current()
    }
}

impl fmt::Display for NsLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
