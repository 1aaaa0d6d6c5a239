//! Header sets that mimic the first-party web client.

use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, COOKIE, HeaderMap, HeaderName, HeaderValue, PRAGMA,
    REFERER, USER_AGENT,
};

use super::constants::{API_VERSION, SEC_CH_UA};

fn insert(map: &mut HeaderMap, name: HeaderName, value: &str) {
    // Caller-supplied values (UA, referer, cookie) may carry bytes a header cannot hold.
    match HeaderValue::from_str(value) {
        Ok(v) => {
            map.insert(name, v);
        }
        Err(_) => tracing::warn!(header = %name, "dropping header with invalid value"),
    }
}

fn common(map: &mut HeaderMap, user_agent: &str, cookie: Option<&str>) {
    insert(map, ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9");
    insert(map, CACHE_CONTROL, "no-cache");
    insert(map, PRAGMA, "no-cache");
    insert(map, HeaderName::from_static("sec-ch-ua"), SEC_CH_UA);
    insert(map, HeaderName::from_static("sec-ch-ua-mobile"), "?0");
    insert(map, HeaderName::from_static("sec-ch-ua-platform"), "\"Windows\"");
    insert(map, USER_AGENT, user_agent);
    if let Some(cookie) = cookie.filter(|c| !c.is_empty()) {
        insert(map, COOKIE, cookie);
    }
}

/// Headers for the JSON hot-list endpoint (an XHR issued from the hot page).
pub(crate) fn api_headers(referer: &str, user_agent: &str, cookie: Option<&str>) -> HeaderMap {
    let mut map = HeaderMap::new();
    common(&mut map, user_agent, cookie);
    insert(&mut map, ACCEPT, "*/*");
    insert(&mut map, HeaderName::from_static("priority"), "u=1, i");
    insert(&mut map, HeaderName::from_static("sec-fetch-dest"), "empty");
    insert(&mut map, HeaderName::from_static("sec-fetch-mode"), "cors");
    insert(&mut map, HeaderName::from_static("sec-fetch-site"), "same-origin");
    insert(&mut map, REFERER, referer);
    insert(&mut map, HeaderName::from_static("x-api-version"), API_VERSION);
    insert(&mut map, HeaderName::from_static("x-requested-with"), "fetch");
    map
}

/// Headers for a top-level document navigation to the hot page.
pub(crate) fn page_headers(referer: &str, user_agent: &str, cookie: Option<&str>) -> HeaderMap {
    let mut map = HeaderMap::new();
    common(&mut map, user_agent, cookie);
    insert(
        &mut map,
        ACCEPT,
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    );
    insert(&mut map, HeaderName::from_static("sec-fetch-dest"), "document");
    insert(&mut map, HeaderName::from_static("sec-fetch-mode"), "navigate");
    insert(&mut map, HeaderName::from_static("sec-fetch-site"), "same-origin");
    insert(&mut map, HeaderName::from_static("sec-fetch-user"), "?1");
    insert(&mut map, HeaderName::from_static("upgrade-insecure-requests"), "1");
    insert(&mut map, REFERER, referer);
    map
}
