//! Locale tag resolution with a per-platform cache.
//!
//! Tags are never rejected. `"en_US"` and `"en-US"` split the same way but are
//! cached under their own spelling; a missing tag and an empty tag both mean
//! the process default (`en-US`).

use std::collections::HashMap;
use std::sync::Arc;

use native_engines::foundation::NsLocale;
use native_engines::jdk;
use parking_lot::RwLock;
use tracing::trace;

/// A native engine locale the resolver can build
pub trait NativeLocale: Send + Sync + 'static {
    /// Build from a language and an optional, non-empty region
    fn from_parts(language: &str, region: Option<&str>) -> Self;

    /// The locale used when no tag is given
    fn process_default() -> Self;
}

impl NativeLocale for jdk::Locale {
    fn from_parts(language: &str, region: Option<&str>) -> Self {
        match region {
            Some(region) => jdk::Locale::with_country(language, region),
            None => jdk::Locale::new(language),
        }
    }

    fn process_default() -> Self {
        jdk::Locale::us()
    }
}

impl NativeLocale for NsLocale {
    fn from_parts(language: &str, region: Option<&str>) -> Self {
        match region {
            Some(region) => NsLocale::with_identifier(&format!("{language}_{region}")),
            None => NsLocale::with_identifier(language),
        }
    }

    fn process_default() -> Self {
        NsLocale::current()
    }
}

/// Split a tag into language and region
///
/// Underscores become hyphens; the language runs up to the first hyphen and
/// the region up to the next one. Anything after that is ignored, and an
/// empty region counts as none.
///
/// ```
/// use intl_shim::split_locale_tag;
///
/// assert_eq!(split_locale_tag("zh_Hant_TW"), ("zh".to_string(), Some("Hant".to_string())));
/// assert_eq!(split_locale_tag("fr"), ("fr".to_string(), None));
/// assert_eq!(split_locale_tag("de-"), ("de".to_string(), None));
/// ```
pub fn split_locale_tag(tag: &str) -> (String, Option<String>) {
    let normalized = tag.replace('_', "-");
    match normalized.split_once('-') {
        Some((language, rest)) => {
            let region = rest.split('-').next().unwrap_or_default();
            let region = Some(region.to_string()).filter(|r| !r.is_empty());
            (language.to_string(), region)
        }
        None => (normalized, None),
    }
}

/// Memoizing tag → native locale resolver
///
/// Created with its platform and kept for the platform's lifetime. Entries
/// are never evicted, so the same tag always yields the same `Arc`.
#[derive(Debug)]
pub struct LocaleResolver<L> {
    cache: RwLock<HashMap<Option<String>, Arc<L>>>,
}

impl<L: NativeLocale> LocaleResolver<L> {
    /// Empty resolver
    pub fn new() -> Self {
        LocaleResolver {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve `tag`, building and caching the locale on first use
    pub fn resolve(&self, tag: Option<&str>) -> Arc<L> {
        let key = tag.map(str::to_string);
        if let Some(locale) = self.cache.read().get(&key) {
            trace!(?tag, "locale cache hit");
            return Arc::clone(locale);
        }

        let mut cache = self.cache.write();
        let locale = cache.entry(key).or_insert_with(|| {
            trace!(?tag, "locale cache miss");
            Arc::new(build(tag))
        });
        Arc::clone(locale)
    }

    /// Number of cached tags
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// True before the first resolution
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl<L: NativeLocale> Default for LocaleResolver<L> {
    fn default() -> Self {
        LocaleResolver::new()
    }
}

fn build<L: NativeLocale>(tag: Option<&str>) -> L {
    match tag.filter(|t| !t.is_empty()) {
        Some(tag) => {
            let (language, region) = split_locale_tag(tag);
            L::from_parts(&language, region.as_deref())
        }
        None => L::process_default(),
    }
}
