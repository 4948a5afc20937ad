//! Command line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use intl_types::{CurrencyDisplay, NumberFormatOptions, NumberStyle, PatternDefinition};

use crate::error::CliResult;

/// Which native engine to format with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformKind {
    /// `java.text` with the grouping separator correction
    Android,
    /// Foundation formatters
    Ios,
}

impl Default for PlatformKind {
    fn default() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            PlatformKind::Ios
        } else {
            PlatformKind::Android
        }
    }
}

/// Locale-aware date and number formatting on native engines
#[derive(Debug, Parser)]
#[command(name = "native-intl", version, about)]
pub struct Cli {
    /// Native engine to use
    #[arg(long, value_enum, global = true, default_value_t = PlatformKind::default())]
    pub platform: PlatformKind,

    /// BCP-47 locale tag (e.g. "de-DE"); the engine default when absent
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the native date/time pattern for a style request
    Pattern {
        /// Date style; "full" selects the full form, anything else short
        #[arg(long)]
        date: Option<String>,

        /// Include the time; the granularity value is accepted but unused
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        time: Option<String>,
    },

    /// Render a date with a native pattern
    Date {
        /// Native date pattern (e.g. "EEEE d MMMM y")
        #[arg(long)]
        pattern: String,

        /// RFC 3339 timestamp; now when absent
        #[arg(long)]
        at: Option<String>,
    },

    /// Render a number
    Number(NumberArgs),
}

impl Command {
    /// The `{date?, time?}` request of a `pattern` subcommand
    pub fn pattern_definition(&self) -> Option<PatternDefinition> {
        match self {
            Command::Pattern { date, time } => Some(PatternDefinition {
                date: date.clone(),
                time: time.clone(),
            }),
            _ => None,
        }
    }
}

/// Arguments of the `number` subcommand
#[derive(Debug, Clone, Args)]
pub struct NumberArgs {
    /// Value to format
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Option bag as JSON (camelCase keys, as in Intl.NumberFormat)
    #[arg(long)]
    pub options: Option<String>,

    /// decimal, percent or currency
    #[arg(long)]
    pub style: Option<String>,

    /// ISO 4217 currency code
    #[arg(long)]
    pub currency: Option<String>,

    /// symbol, narrowSymbol or code
    #[arg(long)]
    pub currency_display: Option<String>,

    /// Turn grouping separators off
    #[arg(long)]
    pub no_grouping: bool,

    /// Minimum integer digits
    #[arg(long)]
    pub min_int: Option<u32>,

    /// Minimum fraction digits
    #[arg(long)]
    pub min_frac: Option<u32>,

    /// Maximum fraction digits
    #[arg(long)]
    pub max_frac: Option<u32>,

    /// Explicit native number pattern
    #[arg(long)]
    pub pattern: Option<String>,
}

impl NumberArgs {
    /// Build the option bag: `--options` first, individual flags on top
    pub fn to_options(&self) -> CliResult<NumberFormatOptions> {
        let mut options = match &self.options {
            Some(json) => NumberFormatOptions::from_json(json)?,
            None => NumberFormatOptions::default(),
        };

        if let Some(style) = &self.style {
            options.style = Some(NumberStyle::from_name(style));
        }
        if let Some(currency) = &self.currency {
            options.currency = Some(currency.clone());
        }
        if let Some(display) = &self.currency_display {
            options.currency_display = Some(CurrencyDisplay::from_name(display));
        }
        if self.no_grouping {
            options.use_grouping = Some(false);
        }
        if self.min_int.is_some() {
            options.minimum_integer_digits = self.min_int;
        }
        if self.min_frac.is_some() {
            options.minimum_fraction_digits = self.min_frac;
        }
        if self.max_frac.is_some() {
            options.maximum_fraction_digits = self.max_frac;
        }
        Ok(options)
    }
}
