//! URL canonicalization and identifier extraction.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static QUESTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/questions?/(\d+)").expect("static regex"));

const PLURAL_SEGMENT: &str = "/questions/";
const SINGULAR_SEGMENT: &str = "/question/";

/// Rewrites API-flavoured links into their public web form.
///
/// Two rewrites are applied: the API hostname becomes the web hostname, and the first
/// `/questions/` path segment becomes `/question/`. Both are no-ops on an already
/// canonical listing URL, so canonicalizing twice gives the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCanonicalizer {
    api_host: String,
    web_host: String,
}

impl UrlCanonicalizer {
    pub fn new(api_host: impl Into<String>, web_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            web_host: web_host.into(),
        }
    }

    /// Canonicalize `input`. Empty input yields an empty string; strings that do not
    /// parse as absolute URLs get the same rewrites applied textually.
    pub fn canonicalize(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }
        match Url::parse(input) {
            Ok(mut parsed) => {
                if parsed.host_str() == Some(self.api_host.as_str())
                    && parsed.set_host(Some(&self.web_host)).is_err()
                {
                    return self.canonicalize_text(input);
                }
                let path = parsed.path().replacen(PLURAL_SEGMENT, SINGULAR_SEGMENT, 1);
                parsed.set_path(&path);
                parsed.to_string()
            }
            Err(_) => self.canonicalize_text(input),
        }
    }

    fn canonicalize_text(&self, input: &str) -> String {
        input
            .replacen(&self.api_host, &self.web_host, 1)
            .replacen(PLURAL_SEGMENT, SINGULAR_SEGMENT, 1)
    }
}

/// Extract the numeric question id from a listing-style URL (`/question/<n>` or `/questions/<n>`).
pub fn extract_question_id(input: &str) -> Option<String> {
    QUESTION_ID
        .captures(input)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
