//! hotlist: resilient acquisition of the Zhihu hot list.
//!
//! Three strategies are tried in order (JSON endpoint, embedded page state, headless
//! browser). The first non-empty result is normalized into [`CanonicalItem`]s, de-duplicated,
//! and merged into a per-day JSON file.
//!
//! ```no_run
//! # async fn run() -> Result<(), hotlist::HotError> {
//! use hotlist::{Cascade, DailyStore, HotClient, today_key};
//!
//! let client = HotClient::builder().build()?;
//! let store = DailyStore::new("data");
//! let summary = Cascade::standard().run(&client, &store, &today_key()).await?;
//! println!("{} new items", summary.new_items);
//! # Ok(())
//! # }
//! ```

pub mod canon;
pub mod cascade;
pub mod core;
pub mod credentials;
pub mod fetch;
pub mod pipeline;

pub use canon::{UrlCanonicalizer, extract_question_id};
pub use cascade::{Cascade, DEFAULT_DEADLINE};
pub use self::core::{
    BrowserOptions, CanonicalItem, FetchStrategy, HotClient, HotClientBuilder, HotError,
    RawApiItem, RawBatch, RawBrowserItem, RetryConfig,
};
pub use fetch::{BrowserAutomation, DirectQuery, RenderedPage};
pub use pipeline::{
    DailyStore, DayEntry, MergeOutcome, RunSummary, dedupe, item_key, items_from_payload,
    today_key, write_outputs,
};
