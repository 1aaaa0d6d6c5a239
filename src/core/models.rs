use serde::{Deserialize, Serialize};

use crate::core::wire::{lenient_id, lenient_string, string_or_empty};

/// The unified record every strategy is normalized into.
///
/// This is the shape that is deduplicated, persisted per day and handed to renderers.
/// It serializes as `{id, href, title, image, hotScore}`; absent values are written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalItem {
    /// Platform-native numeric identifier, when one could be found.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    /// Canonical absolute URL; empty when unknown.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub href: String,
    /// Trimmed display text; may be empty.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    /// Thumbnail URL.
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    /// Freeform magnitude token such as `"1495万"` or `"320"`.
    #[serde(rename = "hotScore", default, deserialize_with = "lenient_string")]
    pub hot_score: Option<String>,
}

impl CanonicalItem {
    /// Convenience constructor used mostly by tests and offline tooling.
    pub fn with_href(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }
}
