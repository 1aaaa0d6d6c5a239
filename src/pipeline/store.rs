//! Per-day incremental persistence.
//!
//! Each calendar day is one JSON array at `<dir>/<YYYY-MM-DD>.json`. Runs within a day only
//! ever append: existing entries keep their position, and entries whose composite key is
//! already recorded are skipped. Stored elements are written back exactly as they were read,
//! whatever their shape. The file is read, merged and rewritten in full with no
//! locking, so two concurrent runs on the same day race (last writer wins).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dedupe::item_key;
use crate::core::{CanonicalItem, HotError};

/// Result of merging a run into its day file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The full day list as written, read leniently: previous entries (stored elements that
    /// are not item objects appear blank) followed by the newly added ones.
    pub merged: Vec<CanonicalItem>,
    /// How many items of this run were new for the day.
    pub added: usize,
}

/// One persisted day, as listed by [`DailyStore::history`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub date: String,
    pub items: Vec<CanonicalItem>,
}

/// Today's date key in the local calendar.
pub fn today_key() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Accept only zero-padded, calendar-valid `YYYY-MM-DD` keys.
pub fn validate_date_key(key: &str) -> Result<(), HotError> {
    let shaped = key.len() == 10
        && key.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if shaped && NaiveDate::parse_from_str(key, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(HotError::InvalidDateKey(key.to_string()))
    }
}

/// Read and parse a JSON file, yielding `None` when it is missing, empty or malformed.
pub(crate) fn read_json_safe<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "unreadable file treated as empty");
            }
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "corrupt file treated as empty");
            None
        }
    }
}

/// Write `value` as pretty JSON, creating parent directories as needed.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), HotError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}

/// Raw elements of a day file. Only a missing, unparseable or non-array file reads as empty;
/// the elements of an array are kept exactly as stored.
fn read_day_values(path: &Path) -> Vec<Value> {
    match read_json_safe::<Value>(path) {
        Some(Value::Array(values)) => values,
        Some(_) => {
            tracing::warn!(path = %path.display(), "day file is not an array, treated as empty");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Lenient view of one stored element; anything that is not an item object reads as blank.
fn item_from_value(value: &Value) -> CanonicalItem {
    CanonicalItem::deserialize(value).unwrap_or_default()
}

/// Owner of the on-disk daily index.
#[derive(Debug, Clone)]
pub struct DailyStore {
    dir: PathBuf,
}

impl DailyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the file for `date_key`.
    pub fn day_path(&self, date_key: &str) -> Result<PathBuf, HotError> {
        validate_date_key(date_key)?;
        Ok(self.dir.join(format!("{date_key}.json")))
    }

    /// The persisted list for `date_key`; missing or corrupt files read as empty.
    pub fn load_day(&self, date_key: &str) -> Result<Vec<CanonicalItem>, HotError> {
        let path = self.day_path(date_key)?;
        Ok(read_day_values(&path).iter().map(item_from_value).collect())
    }

    /// Append the items of this run that the day has not seen yet and rewrite the file.
    pub fn merge(
        &self,
        date_key: &str,
        new_items: &[CanonicalItem],
    ) -> Result<MergeOutcome, HotError> {
        let path = self.day_path(date_key)?;
        let mut stored = read_day_values(&path);
        let mut merged: Vec<CanonicalItem> = stored.iter().map(item_from_value).collect();

        let mut seen: HashSet<String> = merged.iter().map(item_key).collect();
        let added: Vec<CanonicalItem> = new_items
            .iter()
            .filter(|item| seen.insert(item_key(item)))
            .cloned()
            .collect();

        let added_count = added.len();
        for item in &added {
            stored.push(serde_json::to_value(item)?);
        }
        merged.extend(added);
        write_json(&path, &stored)?;

        tracing::debug!(
            date_key,
            path = %path.display(),
            total = merged.len(),
            added = added_count,
            "day file merged"
        );
        Ok(MergeOutcome {
            merged,
            added: added_count,
        })
    }

    /// Every persisted day, newest first. Unreadable days are listed with no items.
    pub fn history(&self) -> Vec<DayEntry> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut dates: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter_map(|name| name.strip_suffix(".json").map(str::to_string))
            .filter(|date| validate_date_key(date).is_ok())
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));

        dates
            .into_iter()
            .map(|date| {
                let items = read_day_values(&self.dir.join(format!("{date}.json")))
                    .iter()
                    .map(item_from_value)
                    .collect();
                DayEntry { date, items }
            })
            .collect()
    }
}
