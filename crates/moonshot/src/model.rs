//! Core catalog records for moonshot.
//!
//! This module defines the astronaut and mission records decoded from the
//! bundled datasets, along with the display values derived from them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a mission has no known launch date.
pub const UNKNOWN_DATE: &str = "N/A";

/// A person record from `astronauts.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Astronaut {
    /// Unique identifier, also the image asset key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Biography text.
    pub description: String,
}

/// Identifier of a mission, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissionId {
    /// A numeric id such as `11`.
    Number(u64),
    /// A free-form id such as `"soyuz"`.
    Text(String),
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MissionId {
    /// All-digit input is numeric; anything else is textual.
    fn from(s: &str) -> Self {
        let s = s.trim();
        s.parse::<u64>()
            .map_or_else(|_| Self::Text(s.to_string()), Self::Number)
    }
}

impl FromStr for MissionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<u64> for MissionId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

/// One entry of a mission's crew list, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrewRole {
    /// Join key into the astronaut table.
    pub name: String,
    /// Role label, unique within one mission's crew.
    pub role: String,
}

/// A spaceflight record from `missions.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Mission identifier.
    pub id: MissionId,
    /// Launch date, `None` when the mission never launched or the date is unknown.
    #[serde(
        default,
        deserialize_with = "launch_date::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub launch_date: Option<NaiveDate>,
    /// Mission summary.
    pub description: String,
    /// Crew in display order.
    pub crew: Vec<CrewRole>,
}

impl Mission {
    /// Human-readable mission name, e.g. `Apollo 11`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("Apollo {}", self.id)
    }

    /// Image asset key, e.g. `apollo11`.
    #[must_use]
    pub fn image(&self) -> String {
        format!("apollo{}", self.id)
    }

    /// Abbreviated launch date such as `Jul 16, 1969`, or [`UNKNOWN_DATE`].
    #[must_use]
    pub fn formatted_launch_date(&self) -> String {
        self.format_launch_date("%b %-d, %Y")
    }

    /// Long launch date such as `July 16, 1969`, or [`UNKNOWN_DATE`].
    #[must_use]
    pub fn long_launch_date(&self) -> String {
        self.format_launch_date("%B %-d, %Y")
    }

    fn format_launch_date(&self, pattern: &str) -> String {
        self.launch_date.map_or_else(
            || UNKNOWN_DATE.to_string(),
            |date| date.format(pattern).to_string(),
        )
    }
}

/// Launch dates are plain `YYYY-MM-DD` in the bundled data; full RFC 3339
/// timestamps are accepted too and truncated to their date.
mod launch_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer};

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.date_naive()))
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid launch date '{raw}'")))
    }
}
