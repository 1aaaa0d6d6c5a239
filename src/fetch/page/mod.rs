//! Rendered-page strategy: fetch the hot page markup and read the list out of its
//! embedded state JSON, without executing any script.

#[cfg(feature = "debug-dumps")]
mod debug;
pub(crate) mod extract;
pub(crate) mod utils;

pub use extract::{MAX_SEARCH_DEPTH, extract_initial_state, find_hot_list};

use crate::core::client::headers::page_headers;
use crate::core::{FetchStrategy, HotClient, HotError, RawApiItem, RawBatch, net};

/// Reads the hot list from the state JSON the server embeds in the hot page.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderedPage;

impl FetchStrategy for RenderedPage {
    fn name(&self) -> &'static str {
        "page"
    }

    fn try_fetch<'a>(
        &'a self,
        client: &'a HotClient,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<RawBatch, HotError>> + Send + 'a>>
    {
        Box::pin(async move { fetch_via_page(client).await.map(RawBatch::Api) })
    }
}

/// Fetch the hot page and extract its list.
///
/// A page without a recognizable state blob, or whose state holds no list, yields an empty
/// vector rather than an error.
///
/// # Errors
///
/// Fails only on transport errors and non-2xx statuses.
pub async fn fetch_via_page(client: &HotClient) -> Result<Vec<RawApiItem>, HotError> {
    let url = client.hot_url().clone();
    let headers = page_headers(client.home_url().as_str(), client.user_agent(), client.cookie());

    let req = client.http().get(url.clone()).headers(headers);
    let resp = net::send_checked(req, &url).await?;
    let html = net::get_text(resp, "hot_page").await?;

    #[cfg(feature = "debug-dumps")]
    {
        if debug::enabled() {
            let _ = debug::debug_dump_html(&html);
        }
    }

    let Some(state) = extract_initial_state(&html) else {
        return Ok(Vec::new());
    };

    #[cfg(feature = "debug-dumps")]
    {
        if debug::enabled() {
            let _ = debug::debug_dump_state(&state);
        }
    }

    let items: Vec<RawApiItem> = find_hot_list(&state)
        .map(|list| list.iter().cloned().map(RawApiItem::from_value).collect())
        .unwrap_or_default();
    tracing::debug!(count = items.len(), "page state searched");
    Ok(items)
}
