//! Native formatting engines configured by the intl shim
//!
//! This crate provides two small, deterministic formatting engines modelled on
//! the platform libraries the shim drives:
//! - [`jdk`]: a `java.text`-style engine (`Locale`, `DecimalFormat`,
//!   `DecimalFormatSymbols`, `DateFormat`, `SimpleDateFormat`)
//! - [`foundation`]: a Foundation-style engine (`NsLocale`, `NumberFormatter`,
//!   `DateFormatter`)
//!
//! Both read the same static [`locale_data`] and [`currency`] tables and share
//! the [`decimal`] and [`date_pattern`] renderers.
//!
//! # Example
//!
//! ```
//! use native_engines::jdk::{JavaTextEngine, Locale};
//!
//! let engine = JavaTextEngine::new();
//! let format = engine.get_number_instance(&Locale::with_country("de", "DE")).unwrap();
//! assert_eq!(format.format(1234.5), "1.234,5");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod currency;
pub mod date_pattern;
pub mod decimal;
pub mod foundation;
pub mod jdk;
pub mod locale_data;

pub use foundation::FoundationEngine;
pub use jdk::JavaTextEngine;
