//! Raw payload shapes produced by the strategies, read leniently.
//!
//! Upstream payloads drift: ids arrive as numbers or strings, fields come back
//! `null` or with the wrong type. The helpers here turn anything unexpected into
//! "absent" instead of failing the whole item.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keep a value only when it is a JSON string.
pub(crate) fn lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// A string field that reads as empty when missing or mistyped.
pub(crate) fn string_or_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(d)?.unwrap_or_default())
}

/// Identifiers: strings pass through, numbers and booleans are stringified.
pub(crate) fn lenient_id<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Nested objects fall back to their default when they do not fit.
fn lenient<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

/// One entry of the hot-list API `data` array (also the shape embedded in the page state).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawApiItem {
    #[serde(default, deserialize_with = "lenient")]
    pub target: RawTarget,
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<RawChild>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub detail_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
}

impl RawApiItem {
    /// Reads one element of a raw list; anything that is not an object becomes an empty item.
    pub fn from_value(v: Value) -> Self {
        serde_json::from_value(v).unwrap_or_default()
    }

    pub(crate) fn thumbnail(&self) -> Option<&str> {
        self.children
            .first()
            .and_then(|c| c.thumbnail.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawTarget {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawChild {
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: Option<String>,
}

/// A list entry as scraped from the rendered DOM.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawBrowserItem {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(rename = "hotScore", default, deserialize_with = "lenient_string")]
    pub hot_score: Option<String>,
}
