//! LDML date pattern tokenizing and rendering.
//!
//! Both engines speak the same field letters; they differ in how they treat
//! letters they do not know. Rendering is always done in UTC.

use chrono::{DateTime, Datelike, Timelike, Utc};
use intl_types::{IntlError, IntlResult};

use crate::locale_data::CalendarNames;

/// How unknown letters and unterminated quotes are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMode {
    /// Reject them (`java.text.SimpleDateFormat`)
    Strict,
    /// Emit them as literal text (Foundation)
    Lenient,
}

/// A piece of a date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    /// Literal text
    Literal(String),
    /// A field letter repeated `width` times
    Field {
        /// The pattern letter
        letter: char,
        /// Repeat count
        width: usize,
    },
}

const FIELD_LETTERS: &str = "GyMLdEcahHKkmsSzZ";

/// Split a pattern into literal runs and field runs
///
/// ```
/// use native_engines::date_pattern::{tokenize, DateToken, PatternMode};
///
/// let tokens = tokenize("d 'de' MMMM", PatternMode::Strict).unwrap();
/// assert_eq!(tokens[0], DateToken::Field { letter: 'd', width: 1 });
/// assert_eq!(tokens[1], DateToken::Literal(" de ".to_string()));
/// ```
pub fn tokenize(pattern: &str, mode: PatternMode) -> IntlResult<Vec<DateToken>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                literal.push('\'');
                continue;
            }
            let mut closed = false;
            while let Some(q) = chars.next() {
                if q == '\'' {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        literal.push('\'');
                        continue;
                    }
                    closed = true;
                    break;
                }
                literal.push(q);
            }
            if !closed && mode == PatternMode::Strict {
                return Err(IntlError::malformed_date_pattern(pattern, "unterminated quote"));
            }
            continue;
        }

        if !c.is_ascii_alphabetic() {
            literal.push(c);
            continue;
        }

        if !FIELD_LETTERS.contains(c) {
            match mode {
                PatternMode::Strict => {
                    return Err(IntlError::malformed_date_pattern(
                        pattern,
                        format!("illegal pattern character '{c}'"),
                    ));
                }
                PatternMode::Lenient => {
                    literal.push(c);
                    continue;
                }
            }
        }

        let mut width = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            width += 1;
        }
        if !literal.is_empty() {
            tokens.push(DateToken::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(DateToken::Field { letter: c, width });
    }

    if !literal.is_empty() {
        tokens.push(DateToken::Literal(literal));
    }
    Ok(tokens)
}

/// Render tokens for `date` using `names`
pub fn render(tokens: &[DateToken], names: &CalendarNames, date: &DateTime<Utc>) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            DateToken::Literal(text) => out.push_str(text),
            DateToken::Field { letter, width } => render_field(&mut out, *letter, *width, names, date),
        }
    }
    out
}

fn pad(out: &mut String, value: i64, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}

fn render_field(out: &mut String, letter: char, width: usize, names: &CalendarNames, date: &DateTime<Utc>) {
    match letter {
        'G' => out.push_str(names.eras[usize::from(date.year() > 0)]),
        'y' => {
            if width == 2 {
                pad(out, i64::from(date.year().rem_euclid(100)), 2);
            } else {
                pad(out, i64::from(date.year()), width);
            }
        }
        'M' | 'L' => {
            let month = date.month0() as usize;
            match width {
                1 | 2 => pad(out, i64::from(date.month()), width),
                3 => out.push_str(names.months_abbr[month]),
                _ => out.push_str(names.months_wide[month]),
            }
        }
        'd' => pad(out, i64::from(date.day()), width),
        'c' if width <= 2 => pad(out, i64::from(date.weekday().number_from_sunday()), width),
        'E' | 'c' => {
            let weekday = date.weekday().num_days_from_sunday() as usize;
            if width >= 4 {
                out.push_str(names.weekdays_wide[weekday]);
            } else {
                out.push_str(names.weekdays_abbr[weekday]);
            }
        }
        'a' => out.push_str(names.day_periods[usize::from(date.hour() >= 12)]),
        'h' => {
            let hour = match date.hour() % 12 {
                0 => 12,
                h => h,
            };
            pad(out, i64::from(hour), width);
        }
        'H' => pad(out, i64::from(date.hour()), width),
        'K' => pad(out, i64::from(date.hour() % 12), width),
        'k' => {
            let hour = match date.hour() {
                0 => 24,
                h => h,
            };
            pad(out, i64::from(hour), width);
        }
        'm' => pad(out, i64::from(date.minute()), width),
        's' => pad(out, i64::from(date.second()), width),
        'S' => {
            let nanos = format!("{:09}", date.nanosecond() % 1_000_000_000);
            let mut fraction: String = nanos.chars().take(width).collect();
            while fraction.len() < width {
                fraction.push('0');
            }
            out.push_str(&fraction);
        }
        'z' => {
            if width >= 4 {
                out.push_str("Coordinated Universal Time");
            } else {
                out.push_str("UTC");
            }
        }
        'Z' => out.push_str("+0000"),
        other => out.push(other),
    }
}
