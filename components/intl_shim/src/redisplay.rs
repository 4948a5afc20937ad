//! Currency symbol → ISO code redisplay.
//!
//! Both engines read one `¤` as "currency symbol" and `¤¤` as "ISO code", so
//! code display is obtained by doubling the placeholder in the working
//! pattern and rebuilding the formatter from it.

use std::borrow::Cow;
use std::sync::LazyLock;

use intl_types::NumberFormatOptions;
use regex::Regex;

static PLACEHOLDER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("¤+").expect("placeholder regex should compile"));

const CODE_PLACEHOLDER: &str = "¤¤";

/// How a configured currency format shows its currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyRedisplay {
    /// Keep the pattern as the engine produced it
    #[default]
    Symbol,
    /// Rewrite the pattern to show the ISO code
    Code,
}

impl CurrencyRedisplay {
    /// Decide once per formatter
    ///
    /// Only currency style with `currencyDisplay: "code"` and no explicit
    /// pattern asks for the code.
    pub fn resolve(options: &NumberFormatOptions, explicit_pattern: bool) -> Self {
        if !explicit_pattern && options.displays_currency_code() {
            CurrencyRedisplay::Code
        } else {
            CurrencyRedisplay::Symbol
        }
    }

    /// Apply the mode to a native pattern
    ///
    /// ```
    /// use intl_shim::CurrencyRedisplay;
    ///
    /// assert_eq!(CurrencyRedisplay::Code.apply("¤#,##0.00"), "¤¤#,##0.00");
    /// assert_eq!(CurrencyRedisplay::Code.apply("¤¤#,##0.00"), "¤¤#,##0.00");
    /// assert_eq!(CurrencyRedisplay::Symbol.apply("¤#,##0.00"), "¤#,##0.00");
    /// ```
    pub fn apply(self, pattern: &str) -> Cow<'_, str> {
        match self {
            CurrencyRedisplay::Symbol => Cow::Borrowed(pattern),
            CurrencyRedisplay::Code => PLACEHOLDER_RUN.replace_all(pattern, CODE_PLACEHOLDER),
        }
    }
}
