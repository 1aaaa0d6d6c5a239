use std::path::Path;

use super::store::{DailyStore, write_json};
use crate::core::{CanonicalItem, HotError};

/// File name of the per-run snapshot, written next to the day files.
pub const SNAPSHOT_FILE: &str = "hotLinks.json";

/// What a run persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub date_key: String,
    /// Items acquired by this run (after dedup).
    pub total: usize,
    /// Items that were new for the day.
    pub new_items: usize,
    /// Size of the day list after the merge.
    pub day_total: usize,
}

/// Write the current run's deduped list, replacing any previous snapshot.
pub fn write_snapshot(path: &Path, items: &[CanonicalItem]) -> Result<(), HotError> {
    write_json(path, items)
}

/// Persist a run: snapshot first, then the incremental day merge.
pub fn write_outputs(
    store: &DailyStore,
    date_key: &str,
    items: &[CanonicalItem],
) -> Result<RunSummary, HotError> {
    // Reject a bad key before anything touches disk.
    store.day_path(date_key)?;
    write_snapshot(&store.dir().join(SNAPSHOT_FILE), items)?;
    let outcome = store.merge(date_key, items)?;

    tracing::info!(
        "Saved {} items for today ({}), {} new after today de-dup.",
        items.len(),
        date_key,
        outcome.added
    );
    Ok(RunSummary {
        date_key: date_key.to_string(),
        total: items.len(),
        new_items: outcome.added,
        day_total: outcome.merged.len(),
    })
}
