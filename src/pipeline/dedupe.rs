use std::collections::HashSet;

use crate::core::CanonicalItem;

/// Composite identity of an item: its `href`, or `"<title>__<image>"` when the href is empty.
///
/// The key is never empty. Items with no href, title or image all share the key `"__"`.
pub fn item_key(item: &CanonicalItem) -> String {
    if !item.href.is_empty() {
        return item.href.clone();
    }
    format!("{}__{}", item.title, item.image.as_deref().unwrap_or(""))
}

/// Stable de-duplication: the first occurrence of every key is kept, in input order.
pub fn dedupe(items: Vec<CanonicalItem>) -> Vec<CanonicalItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item_key(item)))
        .collect()
}
