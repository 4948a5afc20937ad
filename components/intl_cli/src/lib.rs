//! Native intl CLI library
//!
//! Provides the argument model and the [`Runner`] that drives one
//! [`intl_shim::IntlPlatform`] for the `native-intl` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod error;
pub mod runner;

pub use cli::{Cli, Command, NumberArgs, PlatformKind};
pub use error::{CliError, CliResult};
pub use runner::{run, Runner};
