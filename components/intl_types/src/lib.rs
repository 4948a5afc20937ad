//! Shared value types for the native intl shim.
//!
//! This crate provides the option bags handed over by the calling facade and
//! the error taxonomy used by the native engines and the shim on top of them.
//!
//! # Overview
//!
//! - [`NumberFormatOptions`] - portable number formatting options
//! - [`NumberStyle`] / [`CurrencyDisplay`] - lenient style selectors
//! - [`PatternDefinition`] - the `{date?, time?}` pair used to pick a date pattern
//! - [`DateTimeStyle`] - the native engines' date/time style levels
//! - [`IntlError`] - errors surfaced by the native engines
//!
//! # Examples
//!
//! ```
//! use intl_types::{CurrencyDisplay, NumberFormatOptions, NumberStyle};
//!
//! let options = NumberFormatOptions::from_json(
//!     r#"{"style": "currency", "currency": "USD", "currencyDisplay": "code"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(options.effective_style(), NumberStyle::Currency);
//! assert_eq!(options.currency_display, Some(CurrencyDisplay::Code));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod options;
mod pattern;

pub use error::{IntlError, IntlResult};
pub use options::{CurrencyDisplay, NumberFormatOptions, NumberStyle};
pub use pattern::{DateTimeStyle, PatternDefinition, FULL};
