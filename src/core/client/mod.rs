//! Public client surface + builder.
//! Internals are split into `headers` (first-party header sets), `constants` (UA + defaults)
//! and `retry` (browser navigation retry policy).

mod constants;
pub(crate) mod headers;
pub(crate) mod retry;

pub use retry::RetryConfig;

use crate::canon::UrlCanonicalizer;
use crate::core::HotError;
use constants::{
    DEFAULT_API_HOST, DEFAULT_API_URL, DEFAULT_HOME_URL, DEFAULT_HOT_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_WEB_HOST, USER_AGENT,
};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Options for the headless browser strategy.
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    /// Run without a visible window. Default: `true`.
    pub headless: bool,
    /// Explicit Chrome/Chromium binary. When `None`, common install locations are probed.
    pub chrome_executable: Option<PathBuf>,
    /// Retry policy for each of the two navigations (home, then hot page).
    pub navigation_retry: RetryConfig,
    /// Upper bound for a single navigation attempt.
    pub navigation_timeout: Duration,
    /// Upper bound for the hot list container to appear after navigation.
    pub selector_timeout: Duration,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_executable: None,
            navigation_retry: RetryConfig::default(),
            navigation_timeout: Duration::from_secs(60),
            selector_timeout: Duration::from_secs(60),
        }
    }
}

/// Configuration bundle shared by every strategy: HTTP client, endpoints, credential
/// and browser options.
///
/// The credential is an opaque `Cookie` header value resolved once at startup
/// (see [`crate::credentials`]) and carried by value.
#[derive(Debug, Clone)]
pub struct HotClient {
    http: Client,
    home_url: Url,
    hot_url: Url,
    api_url: Url,
    user_agent: String,
    cookie: Option<String>,
    canonicalizer: UrlCanonicalizer,
    browser: BrowserOptions,
}

impl Default for HotClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl HotClient {
    /// Create a new builder.
    pub fn builder() -> HotClientBuilder {
        HotClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn home_url(&self) -> &Url {
        &self.home_url
    }
    pub(crate) fn hot_url(&self) -> &Url {
        &self.hot_url
    }
    pub(crate) fn api_url(&self) -> &Url {
        &self.api_url
    }
    pub(crate) fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The credential header, if one was configured.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// URL rewriting rules used during normalization.
    pub fn canonicalizer(&self) -> &UrlCanonicalizer {
        &self.canonicalizer
    }

    /// Options for the browser strategy.
    pub fn browser_options(&self) -> &BrowserOptions {
        &self.browser
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct HotClientBuilder {
    user_agent: Option<String>,
    home_url: Option<Url>,
    hot_url: Option<Url>,
    api_url: Option<Url>,
    cookie: Option<String>,
    api_host: Option<String>,
    web_host: Option<String>,
    browser: Option<BrowserOptions>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl HotClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the home page visited before the hot page (e.g., `https://www.zhihu.com/`).
    pub fn home_url(mut self, url: Url) -> Self {
        self.home_url = Some(url);
        self
    }

    /// Override the rendered hot-list page (e.g., `https://www.zhihu.com/hot`).
    pub fn hot_url(mut self, url: Url) -> Self {
        self.hot_url = Some(url);
        self
    }

    /// Override the JSON hot-list endpoint, including its `limit` query.
    pub fn api_url(mut self, url: Url) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Attach a `Cookie` header value to API and page requests and seed the browser session.
    /// Empty strings are ignored.
    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        let cookie = cookie.into();
        self.cookie = (!cookie.is_empty()).then_some(cookie);
        self
    }

    /// Hostname used by links inside API payloads. Default: `api.zhihu.com`.
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Public hostname API links are rewritten to. Default: `www.zhihu.com`.
    pub fn web_host(mut self, host: impl Into<String>) -> Self {
        self.web_host = Some(host.into());
        self
    }

    /// Replace the browser strategy options.
    pub fn browser(mut self, options: BrowserOptions) -> Self {
        self.browser = Some(options);
        self
    }

    /// Set a per-request timeout for API and page fetches. Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<HotClient, HotError> {
        let home_url = match self.home_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_HOME_URL)?,
        };
        let hot_url = match self.hot_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_HOT_URL)?,
        };
        let api_url = match self.api_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_API_URL)?,
        };
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());

        let mut httpb = reqwest::Client::builder()
            .user_agent(user_agent.as_str())
            .cookie_store(true)
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        let canonicalizer = UrlCanonicalizer::new(
            self.api_host.unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            self.web_host.unwrap_or_else(|| DEFAULT_WEB_HOST.to_string()),
        );

        Ok(HotClient {
            http,
            home_url,
            hot_url,
            api_url,
            user_agent,
            cookie: self.cookie,
            canonicalizer,
            browser: self.browser.unwrap_or_default(),
        })
    }
}
