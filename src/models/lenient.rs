//! Lenient serde helpers for numeric product fields.
//!
//! The backend is not consistent about numeric encoding: prices arrive as
//! numbers from some endpoints and as decimal strings from platform-synced
//! records. These helpers accept either and map unparseable or missing
//! values to the field's empty state instead of failing the whole list.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumberOrString {
    fn into_f64(self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Other(_) => None,
        }
    }
}

/// Deserializes a required number, defaulting to `0.0`.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?
        .and_then(NumberOrString::into_f64)
        .unwrap_or(0.0))
}

/// Deserializes an optional number.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?.and_then(NumberOrString::into_f64))
}

/// Deserializes a whole-number quantity, defaulting to `0`.
#[allow(clippy::cast_possible_truncation)]
pub fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?
        .and_then(NumberOrString::into_f64)
        .map_or(0, |n| n.trunc() as i64))
}

/// Deserializes an optional whole-number quantity.
#[allow(clippy::cast_possible_truncation)]
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?
        .and_then(NumberOrString::into_f64)
        .map(|n| n.trunc() as i64))
}
