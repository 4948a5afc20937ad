//! Locale-aware date and number formatting over native engines
//!
//! This crate maps a small portable option surface onto two native engines:
//! - [`android::AndroidIntl`]: `java.text` (with a grouping separator
//!   correction for defective engine builds)
//! - [`ios::IosIntl`]: Foundation formatters
//!
//! Both implement [`IntlPlatform`]; [`DefaultPlatform`] picks one for the
//! build target.
//!
//! Shared pieces:
//! - [`LocaleResolver`]: memoized tag → native locale resolution
//! - [`DateStyleCase`]: the eight-way date/time style decision table
//! - [`CurrencyRedisplay`]: symbol → ISO code display rewrite
//! - [`correct_grouping_separator`]: the grouping separator correction
//!
//! # Example
//!
//! ```
//! use intl_shim::{AndroidIntl, IntlPlatform, NativeNumberFormat};
//! use intl_types::{CurrencyDisplay, NumberFormatOptions, PatternDefinition};
//!
//! let platform = AndroidIntl::new();
//!
//! let pattern = platform
//!     .native_date_pattern(&PatternDefinition::date("full"), Some("en-US"))
//!     .unwrap();
//! assert_eq!(pattern, "EEEE, MMMM d, y");
//!
//! let options = NumberFormatOptions::currency("USD").with_currency_display(CurrencyDisplay::Code);
//! let format = platform.number_format(Some("en-US"), &options, None).unwrap();
//! assert_eq!(format.format_native(1234.5), "USD1,234.50");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod android;
pub mod currency_symbols;
pub mod date_style;
pub mod grouping;
pub mod ios;
pub mod locale;
pub mod platform;
pub mod redisplay;

pub use android::{AndroidIntl, AndroidNumberFormat};
pub use date_style::{DateStyleCase, StyleSelection};
pub use grouping::{correct_grouping_separator, expected_separator, GroupingContext};
pub use ios::{IosIntl, IosNumberFormat};
pub use locale::{split_locale_tag, LocaleResolver, NativeLocale};
pub use platform::{DefaultPlatform, IntlPlatform, NativeNumberFormat};
pub use redisplay::CurrencyRedisplay;
