//! Loading the opaque session credential.
//!
//! Cookies are exported from a logged-in browser as a JSON array and supplied either through
//! the environment or a file. They are normalized once at startup, rendered as a `Cookie`
//! header, and passed by value into [`crate::HotClient`].

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::HotError;

/// Domain assigned to cookies exported without one.
pub const DEFAULT_COOKIE_DOMAIN: &str = ".zhihu.com";

/// Environment variable holding the base64-encoded cookie JSON.
pub const ENV_COOKIES_BASE64: &str = "COOKIES_JSON_BASE64";
/// Environment variable holding the raw cookie JSON.
pub const ENV_COOKIES_JSON: &str = "COOKIES_JSON";

/// A cookie reduced to the fields a browser session needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Unix seconds; `-1` for a session cookie.
    pub expires: f64,
    pub http_only: bool,
    pub secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
}

/// Where the cookie JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieSource {
    /// Base64 of the JSON array.
    Base64Json(String),
    /// The JSON array itself.
    Json(String),
    /// A file containing the JSON array.
    File(PathBuf),
}

impl CookieSource {
    /// Pick a source from the environment, falling back to `file` when it exists.
    ///
    /// Precedence: [`ENV_COOKIES_BASE64`], then [`ENV_COOKIES_JSON`], then the file.
    pub fn from_env(file: &Path) -> Option<Self> {
        if let Ok(v) = std::env::var(ENV_COOKIES_BASE64) {
            return Some(Self::Base64Json(v));
        }
        if let Ok(v) = std::env::var(ENV_COOKIES_JSON) {
            return Some(Self::Json(v));
        }
        file.exists().then(|| Self::File(file.to_path_buf()))
    }

    /// Read and parse the raw JSON behind this source.
    pub fn read(&self) -> Result<Value, HotError> {
        let text = match self {
            Self::Base64Json(b64) => {
                let bytes = STANDARD
                    .decode(b64.trim())
                    .map_err(|e| HotError::Data(format!("cookie base64: {e}")))?;
                String::from_utf8(bytes)
                    .map_err(|e| HotError::Data(format!("cookie base64 is not UTF-8: {e}")))?
            }
            Self::Json(json) => json.clone(),
            Self::File(path) => std::fs::read_to_string(path)?,
        };
        Ok(serde_json::from_str(&text)?)
    }
}

fn str_field<'a>(cookie: &'a Value, key: &str) -> Option<&'a str> {
    cookie.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn bool_field(cookie: &Value, key: &str) -> bool {
    cookie.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn normalize_same_site(v: &Value) -> Option<String> {
    match v {
        Value::Number(n) => Some(
            match n.as_i64() {
                Some(0) => "None",
                Some(2) => "Strict",
                _ => "Lax",
            }
            .to_string(),
        ),
        Value::String(s) if !s.is_empty() => {
            let lower = s.to_lowercase();
            let mut chars = lower.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
        }
        _ => None,
    }
}

/// Normalize an exported cookie array. Entries without a name or value are dropped;
/// anything other than an array yields no cookies.
pub fn format_cookies(raw: &Value) -> Vec<Cookie> {
    let Some(entries) = raw.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|c| Cookie {
            name: str_field(c, "name").unwrap_or("").to_string(),
            value: str_field(c, "value").unwrap_or("").to_string(),
            domain: str_field(c, "domain")
                .unwrap_or(DEFAULT_COOKIE_DOMAIN)
                .to_string(),
            path: str_field(c, "path").unwrap_or("/").to_string(),
            expires: c
                .get("expires")
                .and_then(Value::as_f64)
                .filter(|e| *e != 0.0)
                .unwrap_or(-1.0),
            http_only: bool_field(c, "httpOnly"),
            secure: bool_field(c, "secure"),
            same_site: c.get("sameSite").and_then(normalize_same_site),
        })
        .filter(|c| !c.name.is_empty() && !c.value.is_empty())
        .collect()
}

/// Render cookies as a `Cookie` header value (`a=1; b=2`).
pub fn cookies_to_header(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Split a `Cookie` header value back into `(name, value)` pairs.
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Resolve the credential header from the environment or `file`.
///
/// Failures are logged and treated as "no credential"; the strategies still run, only
/// more likely to be rate-limited.
pub fn load_cookie_header(file: &Path) -> Option<String> {
    let source = CookieSource::from_env(file)?;
    let cookies = match source.read() {
        Ok(raw) => format_cookies(&raw),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load cookies");
            Vec::new()
        }
    };
    if cookies.is_empty() {
        tracing::warn!("No cookies loaded. Requests may be rate-limited.");
        return None;
    }
    tracing::info!("Loaded {} cookies.", cookies.len());
    Some(cookies_to_header(&cookies))
}
