use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum HotError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A response body could not be parsed as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was in an unexpected shape.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A strategy completed but produced no usable items.
    #[error("strategy `{strategy}` returned no items")]
    Empty {
        /// Name of the strategy that came back empty.
        strategy: &'static str,
    },

    /// Launching or driving the headless browser failed.
    #[error("browser error: {0}")]
    Browser(String),

    /// A bounded wait (navigation, selector, cascade budget) elapsed.
    #[error("timed out: {0}")]
    Timeout(String),

    /// Reading or writing persisted files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A date key was not in `YYYY-MM-DD` form.
    #[error("invalid date key `{0}` (expected YYYY-MM-DD)")]
    InvalidDateKey(String),

    /// The client or cascade was configured inconsistently.
    #[error("invalid configuration: {0}")]
    Config(String),
}
