//! Centralized constants for default endpoints and UA.

/// Desktop Chrome UA; the hot list rejects obviously scripted clients.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/145.0.0.0 Safari/537.36"
);

/// Platform home page; visited first so session cookies attach.
pub(crate) const DEFAULT_HOME_URL: &str = "https://www.zhihu.com/";

/// Rendered hot-list page.
pub(crate) const DEFAULT_HOT_URL: &str = "https://www.zhihu.com/hot";

/// JSON hot-list endpoint, capped at 50 entries.
pub(crate) const DEFAULT_API_URL: &str =
    "https://www.zhihu.com/api/v3/feed/topstory/hot-lists/total?limit=50";

/// Hostname used by API payload links.
pub(crate) const DEFAULT_API_HOST: &str = "api.zhihu.com";

/// Public web hostname API links are rewritten to.
pub(crate) const DEFAULT_WEB_HOST: &str = "www.zhihu.com";

/// Version header the first-party web client sends.
pub(crate) const API_VERSION: &str = "3.0.76";

/// Client hints matching [`USER_AGENT`].
pub(crate) const SEC_CH_UA: &str =
    r#""Not:A-Brand";v="99", "Google Chrome";v="145", "Chromium";v="145""#;

/// Request timeout applied to API and page fetches unless overridden.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
