//! Post-acquisition pipeline: normalization, de-duplication and per-day persistence.

pub mod dedupe;
pub mod normalize;
pub mod output;
pub mod store;

pub use dedupe::{dedupe, item_key};
pub use normalize::{normalize_batch, parse_hot_score};
pub use output::{RunSummary, SNAPSHOT_FILE, write_outputs, write_snapshot};
pub use store::{DailyStore, DayEntry, MergeOutcome, today_key, validate_date_key};

use serde_json::Value;

use crate::canon::UrlCanonicalizer;
use crate::core::{CanonicalItem, RawApiItem};
use crate::fetch::api::data_array;

/// Normalize and dedupe a saved API payload (`{"data": [...]}`) without touching the network.
pub fn items_from_payload(payload: Value, canon: &UrlCanonicalizer) -> Vec<CanonicalItem> {
    let raw: Vec<RawApiItem> = data_array(payload)
        .into_iter()
        .map(RawApiItem::from_value)
        .collect();
    dedupe(normalize::normalize_api_list(&raw, canon))
}
