use std::time::Duration;

/// Retry policy for browser navigations.
///
/// The delay is fixed between attempts; there is no jitter and no growth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Pause between a failed attempt and the next one.
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(1500),
        }
    }
}

impl RetryConfig {
    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Run `op` up to `cfg.max_attempts` times, sleeping `cfg.delay` between failures.
///
/// Every failed attempt is logged at `warn` with `label`; the last error is returned once
/// attempts run out.
pub(crate) async fn retry_fixed<T, E, F, Fut>(
    cfg: &RetryConfig,
    label: &str,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = cfg.attempts();
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(v) => return Ok(v),
            Err(e) => {
                tracing::warn!("{label} failed (attempt {attempt}/{attempts}): {e}");
                if attempt >= attempts {
                    return Err(e);
                }
                attempt += 1;
                tokio::time::sleep(cfg.delay).await;
            }
        }
    }
}
