//! Number formatting through `NSNumberFormatter`.

use intl_types::{CurrencyDisplay, IntlResult, NumberFormatOptions, NumberStyle};
use native_engines::foundation::{FoundationEngine, NsLocale, NumberFormatter, NumberFormatterStyle};
use tracing::debug;

use crate::currency_symbols::narrow_symbol;
use crate::locale::LocaleResolver;
use crate::platform::{explicit, given, NativeNumberFormat};
use crate::redisplay::CurrencyRedisplay;

/// A configured `NSNumberFormatter`
#[derive(Debug, Clone)]
pub struct IosNumberFormat {
    formatter: NumberFormatter,
}

impl IosNumberFormat {
    /// The underlying engine formatter
    pub fn number_formatter(&self) -> &NumberFormatter {
        &self.formatter
    }
}

impl NativeNumberFormat for IosNumberFormat {
    fn format_native(&self, value: f64) -> String {
        self.formatter.string_from_number(value)
    }

    fn native_pattern(&self) -> String {
        self.formatter.positive_format()
    }
}

pub(super) fn configure(
    engine: &FoundationEngine,
    locales: &LocaleResolver<NsLocale>,
    locale: Option<&str>,
    options: &NumberFormatOptions,
    pattern: Option<&str>,
) -> IntlResult<IosNumberFormat> {
    let pattern = explicit(pattern);
    let redisplay = CurrencyRedisplay::resolve(options, pattern.is_some());

    let mut formatter = engine.number_formatter();
    if let Some(tag) = given(locale) {
        formatter.set_locale(NsLocale::clone(&locales.resolve(Some(tag))));
    }

    match options.effective_style() {
        NumberStyle::Decimal => formatter.set_number_style(NumberFormatterStyle::Decimal),
        NumberStyle::Percent => formatter.set_number_style(NumberFormatterStyle::Percent),
        NumberStyle::Currency => {
            formatter.set_number_style(NumberFormatterStyle::Currency);
            if let Some(code) = &options.currency {
                formatter.set_currency_code(code);
                if options.effective_currency_display() == CurrencyDisplay::NarrowSymbol {
                    if let Some(narrow) = narrow_symbol(code) {
                        formatter.set_currency_symbol(narrow);
                    }
                }
            }
        }
    }

    if let Some(digits) = options.minimum_integer_digits {
        formatter.set_minimum_integer_digits(digits);
    }
    if let Some(digits) = options.minimum_fraction_digits {
        formatter.set_minimum_fraction_digits(digits);
    }
    if let Some(digits) = options.maximum_fraction_digits {
        formatter.set_maximum_fraction_digits(digits);
    }
    if let Some(grouping) = options.use_grouping {
        formatter.set_uses_grouping_separator(grouping);
    }

    match pattern {
        Some(pattern) => formatter.set_positive_format(pattern)?,
        None if redisplay == CurrencyRedisplay::Code => {
            let rewritten = redisplay.apply(&formatter.positive_format()).into_owned();
            formatter.set_positive_format(&rewritten)?;
        }
        None => {}
    }

    debug!(
        ?locale,
        style = ?options.effective_style(),
        display = ?options.effective_currency_display(),
        pattern = %formatter.positive_format(),
        "configured ios number format"
    );
    Ok(IosNumberFormat { formatter })
}
