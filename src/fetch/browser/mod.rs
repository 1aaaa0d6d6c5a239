//! Browser automation strategy: drive a headless Chrome through the home page to the hot
//! page and read the rendered list out of the DOM.

pub mod dom;

pub use dom::{DomEntry, LIST_SELECTOR, into_raw_items, parse_metrics_hot_score};

use crate::core::{FetchStrategy, HotClient, HotError, RawBatch};

/// Renders the hot page in a real browser and scrapes the list from the DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAutomation;

impl FetchStrategy for BrowserAutomation {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn try_fetch<'a>(
        &'a self,
        client: &'a HotClient,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<RawBatch, HotError>> + Send + 'a>>
    {
        Box::pin(async move { fetch_via_browser(client).await.map(RawBatch::Browser) })
    }
}

#[cfg(feature = "browser")]
pub use driver::fetch_via_browser;

/// Without the `browser` feature the strategy is present but always fails.
#[cfg(not(feature = "browser"))]
pub async fn fetch_via_browser(
    _client: &HotClient,
) -> Result<Vec<crate::core::RawBrowserItem>, HotError> {
    Err(HotError::Browser(
        "browser support not compiled; rebuild with the `browser` feature".into(),
    ))
}

#[cfg(feature = "browser")]
mod driver {
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant};

    use chromiumoxide::cdp::browser_protocol::network::{CookieParam, SetUserAgentOverrideParams};
    use chromiumoxide::{Browser, BrowserConfig, Page};
    use futures::StreamExt;
    use url::Url;

    use super::dom::{self, DomEntry, LIST_SELECTOR};
    use crate::core::client::retry::retry_fixed;
    use crate::core::{BrowserOptions, HotClient, HotError, RawBrowserItem};
    use crate::credentials::parse_cookie_header;

    /// Common Chrome executable paths to check.
    const CHROME_PATHS: &[&str] = &[
        // Linux
        "/usr/bin/google-chrome",
        "/usr/bin/google-chrome-stable",
        "/usr/bin/chromium",
        "/usr/bin/chromium-browser",
        "/snap/bin/chromium",
        // macOS
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        "/Applications/Chromium.app/Contents/MacOS/Chromium",
        "/opt/google/chrome/google-chrome",
    ];

    const SELECTOR_POLL: Duration = Duration::from_millis(250);

    fn find_chrome(options: &BrowserOptions) -> Option<PathBuf> {
        if let Some(path) = &options.chrome_executable {
            return Some(path.clone());
        }
        CHROME_PATHS
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .map(Path::to_path_buf)
    }

    fn launch_config(options: &BrowserOptions) -> Result<BrowserConfig, HotError> {
        let mut builder = BrowserConfig::builder()
            .window_size(1280, 720)
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox");
        if let Some(path) = find_chrome(options) {
            tracing::info!("Using Chrome at: {}", path.display());
            builder = builder.chrome_executable(path);
        }
        // with_head means NOT headless
        if !options.headless {
            builder = builder.with_head();
        }
        builder
            .build()
            .map_err(|e| HotError::Browser(format!("failed to build browser config: {e}")))
    }

    /// Launch a browser, scrape the list, and close the browser on every path.
    pub async fn fetch_via_browser(client: &HotClient) -> Result<Vec<RawBrowserItem>, HotError> {
        let options = client.browser_options();
        tracing::info!("Launching browser (headless={})", options.headless);

        let (mut browser, mut handler) = Browser::launch(launch_config(options)?)
            .await
            .map_err(|e| HotError::Browser(format!("failed to launch browser: {e}")))?;

        let handler_task = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let result = match browser.new_page("about:blank").await {
            Ok(page) => {
                let result = scrape(&page, client).await;
                let _ = page.close().await;
                result
            }
            Err(e) => Err(HotError::Browser(format!("failed to open page: {e}"))),
        };

        if let Err(e) = browser.close().await {
            tracing::debug!("browser close: {e}");
        }
        let _ = browser.wait().await;
        handler_task.abort();
        tracing::info!("Browser finished and closed.");

        result
    }

    async fn scrape(page: &Page, client: &HotClient) -> Result<Vec<RawBrowserItem>, HotError> {
        let options = client.browser_options();

        page.execute(SetUserAgentOverrideParams::new(client.user_agent().to_string()))
            .await
            .map_err(|e| HotError::Browser(format!("failed to set user agent: {e}")))?;

        safe_goto(page, client.home_url(), "home", options).await?;
        if let Some(cookie) = client.cookie() {
            set_cookies(page, cookie, client.home_url()).await;
        }
        safe_goto(page, client.hot_url(), "hot", options).await?;
        wait_for_list(page, options.selector_timeout).await?;

        let entries: Vec<Option<DomEntry>> = page
            .evaluate(dom::EXTRACT_SCRIPT.to_string())
            .await
            .map_err(|e| HotError::Browser(format!("extraction script failed: {e}")))?
            .into_value()?;
        let items = dom::into_raw_items(entries);
        tracing::debug!(count = items.len(), "dom scraped");
        Ok(items)
    }

    async fn safe_goto(
        page: &Page,
        url: &Url,
        label: &str,
        options: &BrowserOptions,
    ) -> Result<(), HotError> {
        tracing::info!("Navigating to {} ({label})", url);
        let nav_timeout = options.navigation_timeout;
        retry_fixed(&options.navigation_retry, &format!("[{label}] goto"), move || async move {
            match tokio::time::timeout(nav_timeout, page.goto(url.as_str())).await {
                Ok(Ok(_)) => Ok(()),
                Ok(Err(e)) => Err(HotError::Browser(format!("navigation to {url} failed: {e}"))),
                Err(_) => Err(HotError::Browser(format!(
                    "navigation to {url} timed out after {}s",
                    nav_timeout.as_secs()
                ))),
            }
        })
        .await
    }

    async fn set_cookies(page: &Page, header: &str, url: &Url) {
        let params: Vec<CookieParam> = parse_cookie_header(header)
            .into_iter()
            .filter_map(|(name, value)| {
                match CookieParam::builder()
                    .name(name.as_str())
                    .value(value)
                    .url(url.as_str())
                    .build()
                {
                    Ok(p) => Some(p),
                    Err(e) => {
                        tracing::warn!("Failed to build cookie {}: {}", name, e);
                        None
                    }
                }
            })
            .collect();
        if params.is_empty() {
            return;
        }
        let count = params.len();
        match page.set_cookies(params).await {
            Ok(_) => tracing::debug!("Injected {count} cookies"),
            Err(e) => tracing::warn!("Failed to set cookies: {e}"),
        }
    }

    async fn wait_for_list(page: &Page, timeout: Duration) -> Result<(), HotError> {
        let started = Instant::now();
        loop {
            if page.find_element(LIST_SELECTOR).await.is_ok() {
                return Ok(());
            }
            if started.elapsed() >= timeout {
                return Err(HotError::Timeout(format!(
                    "`{LIST_SELECTOR}` did not appear within {}s",
                    timeout.as_secs()
                )));
            }
            tokio::time::sleep(SELECTOR_POLL).await;
        }
    }
}
