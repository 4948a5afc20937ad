//! Number formatting through `java.text.DecimalFormat`.

use intl_types::{CurrencyDisplay, IntlResult, NumberFormatOptions, NumberStyle};
use native_engines::jdk::{Currency, DecimalFormat, JavaTextEngine, Locale};
use tracing::debug;

use crate::currency_symbols::narrow_symbol;
use crate::grouping::{correct_grouping_separator, GroupingContext};
use crate::locale::LocaleResolver;
use crate::platform::{explicit, given, NativeNumberFormat};
use crate::redisplay::CurrencyRedisplay;

/// A configured `DecimalFormat` plus the grouping correction on render
#[derive(Debug, Clone)]
pub struct AndroidNumberFormat {
    format: DecimalFormat,
    grouping: GroupingContext,
}

impl AndroidNumberFormat {
    fn new(format: DecimalFormat) -> Self {
        let symbols = format.decimal_format_symbols();
        let grouping = GroupingContext {
            grouping_used: format.is_grouping_used(),
            grouping_size: format.grouping_size(),
            grouping_separator: symbols.grouping_separator(),
            decimal_separator: symbols.decimal_separator(),
            monetary_decimal_separator: symbols.monetary_decimal_separator(),
            min_fraction_digits: format.minimum_fraction_digits(),
            max_fraction_digits: format.maximum_fraction_digits(),
            multiplier: format.multiplier(),
            pattern: format.to_pattern(),
        };
        AndroidNumberFormat { format, grouping }
    }

    /// The underlying engine format
    pub fn decimal_format(&self) -> &DecimalFormat {
        &self.format
    }
}

impl NativeNumberFormat for AndroidNumberFormat {
    fn format_native(&self, value: f64) -> String {
        let rendered = self.format.format(value);
        correct_grouping_separator(&rendered, value, &self.grouping).into_owned()
    }

    fn native_pattern(&self) -> String {
        self.format.to_pattern()
    }
}

pub(super) fn configure(
    engine: &JavaTextEngine,
    locales: &LocaleResolver<Locale>,
    locale: Option<&str>,
    options: &NumberFormatOptions,
    pattern: Option<&str>,
) -> IntlResult<AndroidNumberFormat> {
    let pattern = explicit(pattern);
    let redisplay = CurrencyRedisplay::resolve(options, pattern.is_some());

    let mut format = match pattern {
        Some(pattern) => engine.decimal_format(pattern)?,
        None => {
            let native_locale = locales.resolve(given(locale));
            match options.effective_style() {
                NumberStyle::Decimal => engine.get_number_instance(&native_locale)?,
                NumberStyle::Percent => engine.get_percent_instance(&native_locale)?,
                NumberStyle::Currency => {
                    let mut format = engine.get_currency_instance(&native_locale)?;
                    if let Some(code) = &options.currency {
                        format.set_currency(&Currency::get_instance(code)?);
                    }
                    format
                }
            }
        }
    };

    if let Some(digits) = options.minimum_integer_digits {
        format.set_minimum_integer_digits(digits);
    }
    if let Some(digits) = options.minimum_fraction_digits {
        format.set_minimum_fraction_digits(digits);
    }
    if let Some(digits) = options.maximum_fraction_digits {
        format.set_maximum_fraction_digits(digits);
    }
    if let Some(grouping) = options.use_grouping {
        format.set_grouping_used(grouping);
    }

    let symbols_locale = given(locale).map(|tag| locales.resolve(Some(tag)));
    let mut symbols = engine.decimal_format_symbols(symbols_locale.as_deref());
    if let Some(code) = &options.currency {
        symbols.set_currency(&Currency::get_instance(code)?);
        if options.effective_currency_display() == CurrencyDisplay::NarrowSymbol {
            if let Some(narrow) = narrow_symbol(code) {
                symbols.set_currency_symbol(narrow);
            }
        }
    }
    format.set_decimal_format_symbols(symbols.clone());

    if redisplay == CurrencyRedisplay::Code {
        let rewritten = redisplay.apply(&format.to_pattern()).into_owned();
        format = engine.decimal_format(&rewritten)?;
        format.set_decimal_format_symbols(symbols);
    }

    debug!(
        ?locale,
        style = ?options.effective_style(),
        display = ?options.effective_currency_display(),
        pattern = %format.to_pattern(),
        "configured android number format"
    );
    Ok(AndroidNumberFormat::new(format))
}
