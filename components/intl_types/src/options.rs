//! Number formatting option bag.
//!
//! Every field is optional. An unset field leaves the native engine default in
//! place, so `None` and "not mentioned by the caller" mean the same thing.

use serde::{Deserialize, Serialize};

use crate::IntlResult;

/// Number formatting style
///
/// Names are matched case-insensitively; anything unrecognised behaves as
/// [`NumberStyle::Decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum NumberStyle {
    /// Plain number formatting
    #[default]
    Decimal,
    /// Percentage formatting
    Percent,
    /// Currency formatting
    Currency,
}

impl NumberStyle {
    /// Parse a style name the way the facade hands it over
    ///
    /// # Examples
    /// ```
    /// use intl_types::NumberStyle;
    ///
    /// assert_eq!(NumberStyle::from_name("Currency"), NumberStyle::Currency);
    /// assert_eq!(NumberStyle::from_name("unit"), NumberStyle::Decimal);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "percent" => NumberStyle::Percent,
            "currency" => NumberStyle::Currency,
            _ => NumberStyle::Decimal,
        }
    }
}

impl From<String> for NumberStyle {
    fn from(name: String) -> Self {
        NumberStyle::from_name(&name)
    }
}

/// Currency display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "camelCase")]
pub enum CurrencyDisplay {
    /// Locale currency symbol (e.g., "US$" outside the US)
    #[default]
    Symbol,
    /// Narrow symbol (e.g., "$" instead of "US$")
    NarrowSymbol,
    /// ISO currency code (e.g., "USD")
    Code,
}

impl CurrencyDisplay {
    /// Parse a display name; the comparison is exact, unknown names mean `Symbol`
    pub fn from_name(name: &str) -> Self {
        match name {
            "narrowSymbol" => CurrencyDisplay::NarrowSymbol,
            "code" => CurrencyDisplay::Code,
            _ => CurrencyDisplay::Symbol,
        }
    }
}

impl From<String> for CurrencyDisplay {
    fn from(name: String) -> Self {
        CurrencyDisplay::from_name(&name)
    }
}

/// Options for number formatting
///
/// Out-of-range digit counts are not validated here; the engine decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberFormatOptions {
    /// The formatting style; absent means decimal
    pub style: Option<NumberStyle>,
    /// ISO 4217 currency code
    pub currency: Option<String>,
    /// How to display the currency
    pub currency_display: Option<CurrencyDisplay>,
    /// Whether to use grouping separators
    pub use_grouping: Option<bool>,
    /// Minimum integer digits
    pub minimum_integer_digits: Option<u32>,
    /// Minimum fraction digits
    pub minimum_fraction_digits: Option<u32>,
    /// Maximum fraction digits
    pub maximum_fraction_digits: Option<u32>,
}

impl NumberFormatOptions {
    /// Decode an option bag from its JSON form
    pub fn from_json(json: &str) -> IntlResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create options for decimal formatting
    pub fn decimal() -> Self {
        NumberFormatOptions {
            style: Some(NumberStyle::Decimal),
            ..Default::default()
        }
    }

    /// Create options for percentage formatting
    pub fn percent() -> Self {
        NumberFormatOptions {
            style: Some(NumberStyle::Percent),
            ..Default::default()
        }
    }

    /// Create options for currency formatting
    pub fn currency(code: &str) -> Self {
        NumberFormatOptions {
            style: Some(NumberStyle::Currency),
            currency: Some(code.to_string()),
            ..Default::default()
        }
    }

    /// Set the currency display mode
    pub fn with_currency_display(mut self, display: CurrencyDisplay) -> Self {
        self.currency_display = Some(display);
        self
    }

    /// Enable or disable grouping
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = Some(use_grouping);
        self
    }

    /// Set the fraction digit bounds
    pub fn with_fraction_digits(mut self, min: u32, max: u32) -> Self {
        self.minimum_fraction_digits = Some(min);
        self.maximum_fraction_digits = Some(max);
        self
    }

    /// Set the minimum integer digits
    pub fn with_minimum_integer_digits(mut self, digits: u32) -> Self {
        self.minimum_integer_digits = Some(digits);
        self
    }

    /// The style in effect, decimal when none was given
    pub fn effective_style(&self) -> NumberStyle {
        self.style.unwrap_or_default()
    }

    /// The currency display in effect, symbol when none was given
    pub fn effective_currency_display(&self) -> CurrencyDisplay {
        self.currency_display.unwrap_or_default()
    }

    /// True when the ISO code should replace the currency symbol
    pub fn displays_currency_code(&self) -> bool {
        self.effective_style() == NumberStyle::Currency
            && self.currency_display == Some(CurrencyDisplay::Code)
    }
}
