//! Map raw strategy output onto [`CanonicalItem`].

use regex::Regex;
use std::sync::LazyLock;

use crate::canon::{UrlCanonicalizer, extract_question_id};
use crate::core::{CanonicalItem, RawApiItem, RawBatch, RawBrowserItem};

static HOT_SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)(万|亿)?").expect("static regex"));

/// Parse a freeform detail string such as `"1495 万热度"` into `"1495万"`.
///
/// Whitespace is stripped first; the first number wins and keeps its magnitude unit when one
/// follows it directly.
pub fn parse_hot_score(detail: &str) -> Option<String> {
    let compact: String = detail.chars().filter(|c| !c.is_whitespace()).collect();
    let caps = HOT_SCORE.captures(&compact)?;
    let number = caps.get(1)?.as_str();
    Some(match caps.get(2) {
        Some(unit) => format!("{number}{}", unit.as_str()),
        None => number.to_string(),
    })
}

fn keep(item: &CanonicalItem) -> bool {
    !item.title.is_empty() || !item.href.is_empty()
}

/// Normalize one API/page-shaped entry.
///
/// The id is taken from the raw target URL, then the canonical href, then `target.id`, then
/// the entry's own `id`. Empty ids are skipped.
pub fn normalize_api_item(item: &RawApiItem, canon: &UrlCanonicalizer) -> CanonicalItem {
    let raw_url = item.target.url.as_deref().unwrap_or("");
    let href = canon.canonicalize(raw_url);
    let id = extract_question_id(raw_url)
        .or_else(|| extract_question_id(&href))
        .or_else(|| item.target.id.clone().filter(|s| !s.is_empty()))
        .or_else(|| item.id.clone().filter(|s| !s.is_empty()));

    CanonicalItem {
        id,
        title: item
            .target
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .to_string(),
        href,
        image: item.thumbnail().map(str::to_string),
        hot_score: item.detail_text.as_deref().and_then(parse_hot_score),
    }
}

/// Normalize one DOM-scraped entry. The id comes from the canonical href, then the rank text.
pub fn normalize_browser_item(item: &RawBrowserItem, canon: &UrlCanonicalizer) -> CanonicalItem {
    let href = canon.canonicalize(item.href.as_deref().unwrap_or(""));
    let id = extract_question_id(&href).or_else(|| item.id.clone().filter(|s| !s.is_empty()));

    CanonicalItem {
        id,
        title: item.title.as_deref().map(str::trim).unwrap_or("").to_string(),
        href,
        image: item.image.clone().filter(|i| !i.is_empty()),
        hot_score: item
            .hot_score
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

pub fn normalize_api_list(items: &[RawApiItem], canon: &UrlCanonicalizer) -> Vec<CanonicalItem> {
    items
        .iter()
        .map(|i| normalize_api_item(i, canon))
        .filter(keep)
        .collect()
}

pub fn normalize_browser_list(
    items: &[RawBrowserItem],
    canon: &UrlCanonicalizer,
) -> Vec<CanonicalItem> {
    items
        .iter()
        .map(|i| normalize_browser_item(i, canon))
        .filter(keep)
        .collect()
}

/// Normalize whatever shape a strategy produced.
pub fn normalize_batch(batch: &RawBatch, canon: &UrlCanonicalizer) -> Vec<CanonicalItem> {
    match batch {
        RawBatch::Api(items) => normalize_api_list(items, canon),
        RawBatch::Browser(items) => normalize_browser_list(items, canon),
    }
}
