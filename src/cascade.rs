//! Ordered fallback over the acquisition strategies.

use std::time::{Duration, Instant};

use crate::core::{CanonicalItem, FetchStrategy, HotClient, HotError};
use crate::fetch::{BrowserAutomation, DirectQuery, RenderedPage};
use crate::pipeline::{self, DailyStore, RunSummary, normalize_batch};

/// Overall budget for one acquisition when none is configured.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(300);

/// Tries each strategy in turn and returns the first non-empty normalized list.
///
/// A strategy that errors, or whose output normalizes to nothing, is logged and the next
/// one is tried. Only the last strategy's error reaches the caller.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), hotlist::HotError> {
/// let client = hotlist::HotClient::builder().build()?;
/// let items = hotlist::Cascade::standard().acquire(&client).await?;
/// println!("{} items", items.len());
/// # Ok(())
/// # }
/// ```
pub struct Cascade {
    strategies: Vec<Box<dyn FetchStrategy>>,
    deadline: Option<Duration>,
}

impl Cascade {
    /// A cascade over `strategies`, in the given order, with the default deadline.
    pub fn new(strategies: Vec<Box<dyn FetchStrategy>>) -> Self {
        Self {
            strategies,
            deadline: Some(DEFAULT_DEADLINE),
        }
    }

    /// Direct query, then rendered page, then browser automation.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(DirectQuery),
            Box::new(RenderedPage),
            Box::new(BrowserAutomation),
        ])
    }

    /// Direct query, then browser automation.
    pub fn without_page() -> Self {
        Self::new(vec![Box::new(DirectQuery), Box::new(BrowserAutomation)])
    }

    /// Replace the overall deadline. `None` lets every strategy run to completion.
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Strategy names in the order they will be tried.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run the strategies until one yields a non-empty list.
    ///
    /// # Errors
    ///
    /// `Config` when there are no strategies, `Timeout` when the deadline elapses, otherwise
    /// the error of the last strategy tried.
    pub async fn acquire(&self, client: &HotClient) -> Result<Vec<CanonicalItem>, HotError> {
        let started = Instant::now();
        let mut last_err = HotError::Config("cascade has no strategies".into());

        for (idx, strategy) in self.strategies.iter().enumerate() {
            let name = strategy.name();
            tracing::info!("Trying strategy {} ({}/{})", name, idx + 1, self.strategies.len());

            let outcome = match self.deadline {
                Some(total) => {
                    let remaining = total.saturating_sub(started.elapsed());
                    match tokio::time::timeout(remaining, strategy.try_fetch(client)).await {
                        Ok(r) => r,
                        Err(_) => {
                            let err = HotError::Timeout(format!(
                                "strategy {name} exceeded the {}s acquisition deadline",
                                total.as_secs()
                            ));
                            tracing::warn!("{err}");
                            return Err(err);
                        }
                    }
                }
                None => strategy.try_fetch(client).await,
            };

            match outcome {
                Ok(batch) => {
                    let items = normalize_batch(&batch, client.canonicalizer());
                    if !items.is_empty() {
                        tracing::info!("Strategy {} returned {} items.", name, items.len());
                        return Ok(items);
                    }
                    tracing::warn!(
                        raw = batch.len(),
                        "Strategy {} returned no usable items, falling back.",
                        name
                    );
                    last_err = HotError::Empty { strategy: name };
                }
                Err(e) => {
                    tracing::warn!("Strategy {} failed: {}", name, e);
                    last_err = e;
                }
            }
        }

        Err(last_err)
    }

    /// Acquire, dedupe and persist one run into `store` under `date_key`.
    pub async fn run(
        &self,
        client: &HotClient,
        store: &DailyStore,
        date_key: &str,
    ) -> Result<RunSummary, HotError> {
        let items = pipeline::dedupe(self.acquire(client).await?);
        pipeline::write_outputs(store, date_key, &items)
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Cascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cascade")
            .field("strategies", &self.strategy_names())
            .field("deadline", &self.deadline)
            .finish()
    }
}
