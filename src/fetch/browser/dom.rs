//! In-page extraction script and the mapping from its output to raw items.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::core::RawBrowserItem;

/// Container whose presence signals that the list has rendered.
pub const LIST_SELECTOR: &str = ".HotList-list section";

/// Evaluated as a plain expression inside the page. Yields one entry per list section,
/// `null` for sections that carry no content anchor. Metrics come back as raw text.
pub(crate) const EXTRACT_SCRIPT: &str = r#"
Array.from(document.querySelectorAll(".HotList-list section")).map((ele) => {
    const link = ele.querySelector(".HotItem-content a");
    if (!link) return null;
    const img = ele.querySelector(".HotItem-img img");
    const index = ele.querySelector(".HotItem-index div");
    const metrics = ele.querySelector(".HotItem-metrics");
    return {
        id: index ? index.textContent.trim() : null,
        href: link.href,
        title: link.title,
        image: img ? img.src : null,
        metrics: metrics ? metrics.textContent.trim() : null,
    };
})
"#;

static HOT_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?\s*[万亿]?)\s*热度").expect("static regex")
});

/// One section as returned by [`EXTRACT_SCRIPT`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DomEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub metrics: Option<String>,
}

/// Pull the display score out of a metrics line such as `"1495万 热度"`.
pub fn parse_metrics_hot_score(text: &str) -> Option<String> {
    HOT_SCORE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Convert the script's output into raw items, skipping sections without an anchor.
pub fn into_raw_items(entries: Vec<Option<DomEntry>>) -> Vec<RawBrowserItem> {
    entries
        .into_iter()
        .flatten()
        .map(|e| RawBrowserItem {
            id: e.id.filter(|s| !s.is_empty()),
            hot_score: e.metrics.as_deref().and_then(parse_metrics_hot_score),
            href: e.href,
            title: e.title,
            image: e.image,
        })
        .collect()
}
