//! Native intl CLI
//!
//! Entry point for `native-intl`. Parses CLI arguments, installs the log
//! subscriber and delegates to the [`intl_cli::Runner`].

use std::io::Write;

use clap::Parser as ClapParser;
use intl_cli::{run, Cli, CliError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(&cli).and_then(|output| {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        Ok(())
    });

    match result {
        Ok(()) => {}
        Err(CliError::Intl(e)) => {
            eprintln!("Formatting Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
