//! Date/time pattern request types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The date style name that selects the full date form
pub const FULL: &str = "full";

/// Date/time formatting style levels understood by the native engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeStyle {
    /// Full format (e.g., "Tuesday, April 12, 2044")
    Full,
    /// Long format (e.g., "April 12, 2044")
    Long,
    /// Medium format (e.g., "Apr 12, 2044")
    Medium,
    /// Short format (e.g., "4/12/44")
    Short,
}

impl DateTimeStyle {
    /// Index into per-style pattern tables (full, long, medium, short)
    pub fn index(self) -> usize {
        match self {
            DateTimeStyle::Full => 0,
            DateTimeStyle::Long => 1,
            DateTimeStyle::Medium => 2,
            DateTimeStyle::Short => 3,
        }
    }
}

/// The `{date?, time?}` pair the facade uses to request a native pattern.
///
/// Only presence matters for `time`: whatever granularity the caller names,
/// the platforms always render a long time. Empty strings count as absent.
///
/// # Examples
///
/// ```
/// use intl_types::PatternDefinition;
///
/// let definition: PatternDefinition =
///     serde_json::from_str(r#"{"date": "full", "time": true}"#).unwrap();
/// assert!(definition.wants_full_date());
/// assert!(definition.has_time());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternDefinition {
    /// Requested date style; `"full"` selects the full form, anything else short
    pub date: Option<String>,
    /// Requested time; any truthy value enables it
    #[serde(deserialize_with = "truthy_time")]
    pub time: Option<String>,
}

impl PatternDefinition {
    /// Definition with neither date nor time
    pub fn none() -> Self {
        PatternDefinition::default()
    }

    /// Definition with a date only
    pub fn date(style: &str) -> Self {
        PatternDefinition {
            date: Some(style.to_string()),
            time: None,
        }
    }

    /// Definition with a time only
    pub fn time(granularity: &str) -> Self {
        PatternDefinition {
            date: None,
            time: Some(granularity.to_string()),
        }
    }

    /// Definition with both date and time
    pub fn date_time(date: &str, time: &str) -> Self {
        PatternDefinition {
            date: Some(date.to_string()),
            time: Some(time.to_string()),
        }
    }

    /// True when a date was requested
    pub fn has_date(&self) -> bool {
        self.date.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// True when a time was requested
    pub fn has_time(&self) -> bool {
        self.time.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// True when the date was requested in its full form
    pub fn wants_full_date(&self) -> bool {
        self.date.as_deref() == Some(FULL)
    }
}

fn truthy_time<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    })
}
