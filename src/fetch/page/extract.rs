//! Locate the embedded state JSON in the hot page and find the hot list inside it.

use serde_json::Value;

use super::utils::{decode_html_entities, find_matching_brace, has_attr, iter_scripts, truncate};

/// `id` of the script element holding the entity-encoded initial data.
pub(crate) const INITIAL_DATA_ID: &str = "js-initialData";

/// Global assignment used by older page builds.
pub(crate) const INITIAL_STATE_GLOBAL: &str = "window.__INITIAL_STATE__";

/// Maximum nesting depth searched for the list; the root sits at depth 0.
pub const MAX_SEARCH_DEPTH: usize = 8;

/// Pattern A: `<script id="js-initialData">` whose body is entity-encoded JSON.
pub(crate) fn try_initial_data_script(html: &str) -> Option<Value> {
    let (_, inner) = iter_scripts(html)
        .into_iter()
        .find(|(tag, _)| has_attr(tag, "id", INITIAL_DATA_ID))?;
    let payload = decode_html_entities(inner.trim());
    match serde_json::from_str(&payload) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!(error = %e, preview = truncate(&payload, 120), "initial data script is not JSON");
            None
        }
    }
}

/// Pattern B: `window.__INITIAL_STATE__ = {...};` inline in a script.
///
/// Every mention of the global is tried in document order; the first one that is an
/// assignment of a parseable object wins. The object is delimited by brace matching and
/// parsed as written first and, failing that, after entity decoding.
pub(crate) fn try_initial_state_global(html: &str) -> Option<Value> {
    html.match_indices(INITIAL_STATE_GLOBAL)
        .find_map(|(start, _)| assigned_object(html, start + INITIAL_STATE_GLOBAL.len()))
}

fn assigned_object(html: &str, after_name: usize) -> Option<Value> {
    let rest = html[after_name..].trim_start().strip_prefix('=')?.trim_start();
    // `==` / `===` comparisons are not assignments.
    if rest.starts_with('=') {
        return None;
    }
    let obj_start = html.len() - rest.len();
    let obj_end = find_matching_brace(html, obj_start)?;
    let obj = &html[obj_start..=obj_end];

    serde_json::from_str::<Value>(obj)
        .or_else(|_| serde_json::from_str(&decode_html_entities(obj)))
        .map_err(|e| {
            tracing::debug!(error = %e, preview = truncate(obj, 120), "initial state global is not JSON");
        })
        .ok()
}

/// Extract the page's root state object, trying pattern A, then pattern B.
pub fn extract_initial_state(html: &str) -> Option<Value> {
    if html.is_empty() {
        return None;
    }
    if let Some(v) = try_initial_data_script(html) {
        tracing::debug!("initial state found via initial data script");
        return Some(v);
    }
    if let Some(v) = try_initial_state_global(html) {
        tracing::debug!("initial state found via global assignment");
        return Some(v);
    }
    tracing::debug!(html_len = html.len(), "no initial state pattern matched");
    None
}

fn has_target_url(item: &Value) -> bool {
    match item.get("target").and_then(|t| t.get("url")) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Null | Value::Bool(false)) | None => false,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

/// A non-empty array with at least one element shaped like `{target: {url: ...}}`.
fn is_hot_list(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().any(has_target_url)
}

fn search(v: &Value, depth: usize) -> Option<&Vec<Value>> {
    if depth > MAX_SEARCH_DEPTH {
        return None;
    }
    match v {
        Value::Array(items) => {
            if is_hot_list(items) {
                return Some(items);
            }
            items.iter().find_map(|child| search(child, depth + 1))
        }
        Value::Object(map) => map.values().find_map(|child| search(child, depth + 1)),
        _ => None,
    }
}

/// Depth-first search for the first array that looks like the hot list.
pub fn find_hot_list(root: &Value) -> Option<&Vec<Value>> {
    search(root, 0)
}
