//! Serde helper for the api's offset-less timestamps
//!
//! Release dates arrive as `"1996-08-01T00:00:00"` with no timezone
//! designator, so they decode to [`chrono::NaiveDateTime`] rather than an
//! offset-aware type. Usage: `#[serde(with = "crate::resource::datetime")]`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
}
