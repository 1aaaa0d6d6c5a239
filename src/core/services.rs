use crate::core::wire::{RawApiItem, RawBrowserItem};
use crate::core::{HotClient, HotError};

/// The untouched output of one strategy, tagged by the shape it arrives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBatch {
    /// Items from the JSON endpoint or the embedded page state.
    Api(Vec<RawApiItem>),
    /// Items scraped from the rendered DOM.
    Browser(Vec<RawBrowserItem>),
}

impl RawBatch {
    /// Number of raw entries, before normalization drops anything.
    pub fn len(&self) -> usize {
        match self {
            RawBatch::Api(v) => v.len(),
            RawBatch::Browser(v) => v.len(),
        }
    }

    /// `true` when the strategy produced no raw entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One self-contained way of acquiring the raw hot list.
///
/// Implementations are iterated in priority order by [`crate::Cascade`]. A strategy
/// reports transport or extraction failures as `Err`; an upstream that answered but
/// yielded nothing is reported as an empty batch and judged by the cascade.
pub trait FetchStrategy: Send + Sync {
    /// Short stable name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Asynchronously fetch the raw list.
    ///
    /// # Arguments
    /// * `client` - Shared configuration bundle (endpoints, credential, browser options).
    ///
    /// # Returns
    /// A `Future` resolving to the raw batch or the error that ended this attempt.
    fn try_fetch<'a>(
        &'a self,
        client: &'a HotClient,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<RawBatch, HotError>> + Send + 'a>>;
}
