//! Serde helpers for wall-clock times.
//!
//! Accepts `HH:MM` as sent by HTML time inputs as well as `HH:MM:SS`,
//! and always emits `HH:MM:SS`.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serializer};

const OUTPUT_FORMAT: &str = "%H:%M:%S";
const INPUT_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parse a time of day in either accepted format.
pub fn parse(value: &str) -> Option<NaiveTime> {
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value.trim(), format).ok())
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(OUTPUT_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| {
        de::Error::custom(format!("invalid time `{}`, expected HH:MM or HH:MM:SS", raw))
    })
}
