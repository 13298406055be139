//! Numeric fields that arrive either as JSON numbers or as decimal strings.
//!
//! The listings service serialises decimal columns (`quantity`, prices) as
//! strings like `"12.50"`, while hand-written fixtures use plain numbers.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Parse a user- or server-supplied decimal. Only finite values are accepted.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Required number, accepting `12`, `12.5` or `"12.50"`.
pub fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(v) => Ok(v),
        NumberOrText::Text(s) => parse_decimal(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid decimal: {s:?}"))),
    }
}

/// Optional number; `null`, a missing field and `""` all read as `None`.
pub fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(v)) => Ok(Some(v)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => parse_decimal(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid decimal: {s:?}"))),
    }
}
