//! Error types surfaced by the native engines.
//!
//! The shim itself never invents failures: malformed locales degrade and unset
//! options fall back to engine defaults. Whatever the engine rejects is passed
//! through to the caller as one of these variants.

use thiserror::Error;

/// An error raised while configuring or invoking a native formatting engine.
///
/// # Examples
///
/// ```
/// use intl_types::IntlError;
///
/// let error = IntlError::InvalidCurrency("ZZZ".to_string());
/// assert_eq!(error.to_string(), "invalid currency code: ZZZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntlError {
    /// The ISO 4217 code is unknown to the engine
    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),

    /// A numeric pattern could not be parsed
    #[error("malformed number pattern {pattern:?}: {reason}")]
    MalformedPattern {
        /// The offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// A date pattern could not be parsed
    #[error("malformed date pattern {pattern:?}: {reason}")]
    MalformedDatePattern {
        /// The offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// An option bag could not be decoded
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl IntlError {
    /// Build a [`IntlError::MalformedPattern`]
    pub fn malformed_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        IntlError::MalformedPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`IntlError::MalformedDatePattern`]
    pub fn malformed_date_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        IntlError::MalformedDatePattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for IntlError {
    fn from(err: serde_json::Error) -> Self {
        IntlError::InvalidOptions(err.to_string())
    }
}

/// Result type for engine and shim operations
pub type IntlResult<T> = Result<T, IntlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_pattern_message() {
        let error = IntlError::malformed_pattern("abc", "no digits");
        assert_eq!(error.to_string(), "malformed number pattern \"abc\": no digits");
    }

    #[test]
    fn test_json_error_converts_to_invalid_options() {
        let err = serde_json::from_str::<u32>("{").unwrap_err();
        let error: IntlError = err.into();
        assert!(matches!(error, IntlError::InvalidOptions(_)));
    }
}
