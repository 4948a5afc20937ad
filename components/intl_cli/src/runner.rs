//! Subcommand execution on one platform.

use chrono::{DateTime, Utc};
use intl_shim::{AndroidIntl, IntlPlatform, IosIntl, NativeNumberFormat};
use tracing::debug;

use crate::cli::{Cli, Command, NumberArgs, PlatformKind};
use crate::error::{CliError, CliResult};

/// Runs subcommands against a platform
pub struct Runner<P> {
    platform: P,
    locale: Option<String>,
}

impl<P: IntlPlatform> Runner<P> {
    /// Runner on the platform's default locale
    pub fn new(platform: P) -> Self {
        Runner {
            platform,
            locale: None,
        }
    }

    /// Set the locale tag every subcommand formats in
    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    /// The platform
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Execute `command` and return its output line
    pub fn execute(&self, command: &Command) -> CliResult<String> {
        let locale = self.locale.as_deref();
        debug!(platform = self.platform.name(), ?locale, ?command, "executing");

        match command {
            Command::Pattern { .. } => {
                let definition = command.pattern_definition().unwrap_or_default();
                Ok(self.platform.native_date_pattern(&definition, locale)?)
            }
            Command::Date { pattern, at } => {
                let date = at.as_deref().map(parse_timestamp).transpose()?;
                Ok(self.platform.format_date_native(pattern, locale, date)?)
            }
            Command::Number(args) => self.number(args),
        }
    }

    fn number(&self, args: &NumberArgs) -> CliResult<String> {
        let options = args.to_options()?;
        let format =
            self.platform
                .number_format(self.locale.as_deref(), &options, args.pattern.as_deref())?;
        Ok(format.format_native(args.value))
    }
}

fn parse_timestamp(input: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|source| CliError::InvalidDate {
            input: input.to_string(),
            source,
        })
}

/// Execute the parsed command line on the selected platform
pub fn run(cli: &Cli) -> CliResult<String> {
    match cli.platform {
        PlatformKind::Android => Runner::new(AndroidIntl::new())
            .with_locale(cli.locale.clone())
            .execute(&cli.command),
        PlatformKind::Ios => Runner::new(IosIntl::new())
            .with_locale(cli.locale.clone())
            .execute(&cli.command),
    }
}
