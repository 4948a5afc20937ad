//! End-to-End CLI Integration Tests
//!
//! Drives both platforms through the intl_cli Runner API, from parsed
//! arguments to the printed line.

use clap::Parser as ClapParser;
use intl_cli::{run, Cli, Command, Runner};
use intl_shim::{AndroidIntl, IosIntl};

fn output(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("Parse failed");
    run(&cli).expect("Execution failed")
}

/// Test: the same number request on both platforms
#[test]
fn test_e2e_number_on_both_platforms() {
    for platform in ["android", "ios"] {
        let text = output(&[
            "native-intl",
            "--platform",
            platform,
            "--locale",
            "de-DE",
            "number",
            "1234567.891",
            "--max-frac",
            "2",
        ]);
        assert_eq!(text, "1.234.567,89", "{}", platform);
    }
}

/// Test: percent style
#[test]
fn test_e2e_percent() {
    let text = output(&["native-intl", "--platform", "android", "number", "0.25", "--style", "percent"]);

    assert_eq!(text, "25%");
}

/// Test: a Runner bound to a platform directly
#[test]
fn test_e2e_runner_with_locale() {
    let command = Command::Pattern {
        date: Some("full".to_string()),
        time: None,
    };
    let android = Runner::new(AndroidIntl::new()).with_locale(Some("de-DE".to_string()));
    let ios = Runner::new(IosIntl::new()).with_locale(Some("de-DE".to_string()));

    assert_eq!(android.execute(&command).unwrap(), ios.execute(&command).unwrap());
}

/// Test: a date rendered from an RFC 3339 timestamp
#[test]
fn test_e2e_date() {
    let text = output(&[
        "native-intl",
        "--platform",
        "ios",
        "--locale",
        "fr-FR",
        "date",
        "--pattern",
        "EEEE d MMMM y",
        "--at",
        "2044-04-12T23:59:59Z",
    ]);

    assert_eq!(text, "mardi 12 avril 2044");
}
