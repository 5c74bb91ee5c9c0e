//! Lenient scalar decoding for backend payloads
//!
//! The backend emits identifiers as JSON numbers, but older endpoints and
//! client-side inputs carry them as strings. Everything handed to callers is
//! normalized to `String`; everything sent back is coerced to a number.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier as it appears on the wire: JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Str(String),
}

impl RawId {
    /// Integer value of this id.
    ///
    /// Strings are read like a lenient integer parse: leading whitespace and
    /// an optional sign, then as many digits as are present. `None` when no
    /// digit leads the string.
    pub fn numeric(&self) -> Option<i64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Str(s) => parse_leading_int(s),
        }
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawId {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<u64> for RawId {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Str(n.to_string()), Self::Num)
    }
}

impl From<&str> for RawId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for RawId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for RawId {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

/// String form of an optional id, empty when absent.
pub fn id_or_empty(id: Option<&RawId>) -> String {
    id.map(ToString::to_string).unwrap_or_default()
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| n * sign)
}

/// Serialize an id as a JSON number.
pub fn id_as_number<S: Serializer>(id: &RawId, serializer: S) -> Result<S::Ok, S::Error> {
    match id.numeric() {
        Some(n) => serializer.serialize_i64(n),
        None => Err(serde::ser::Error::custom(format!("id `{id}` is not numeric"))),
    }
}

/// Serialize an optional id as a JSON number (or null).
pub fn opt_id_as_number<S: Serializer>(
    id: &Option<RawId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => id_as_number(id, serializer),
        None => serializer.serialize_none(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Num(f64),
    Str(String),
}

/// Accept a JSON number, a numeric string, or null for a decimal field.
///
/// Unparseable strings become `None`.
pub fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(
        match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Num(n)) => Some(n),
            Some(NumberOrString::Str(s)) => s.trim().parse().ok(),
            None => None,
        },
    )
}
