//! Debug dump helpers for troubleshooting page extraction.
//!
//! Enabled with the `debug-dumps` feature and `HOTLIST_DEBUG=1`; files land in the temp dir.

use serde_json::Value;
use std::path::PathBuf;

pub(crate) fn enabled() -> bool {
    std::env::var("HOTLIST_DEBUG").ok().as_deref() == Some("1")
}

fn dump_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hotlist-{name}"))
}

pub(crate) fn debug_dump_html(html: &str) -> std::io::Result<()> {
    let path = dump_path("page.html");
    std::fs::write(&path, html)?;
    tracing::debug!(path = %path.display(), "wrote fetched page html");
    Ok(())
}

pub(crate) fn debug_dump_state(state: &Value) -> std::io::Result<()> {
    let path = dump_path("state.json");
    let pretty = serde_json::to_string_pretty(state).unwrap_or_else(|_| state.to_string());
    std::fs::write(&path, pretty)?;
    tracing::debug!(path = %path.display(), "wrote extracted state json");
    Ok(())
}
