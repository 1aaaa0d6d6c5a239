//! Direct query strategy: the JSON hot-list endpoint.

use serde_json::Value;

use crate::core::client::headers::api_headers;
use crate::core::{FetchStrategy, HotClient, HotError, RawApiItem, RawBatch, net};

/// Calls the first-party JSON endpoint with browser-like headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectQuery;

impl FetchStrategy for DirectQuery {
    fn name(&self) -> &'static str {
        "api"
    }

    fn try_fetch<'a>(
        &'a self,
        client: &'a HotClient,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<RawBatch, HotError>> + Send + 'a>>
    {
        Box::pin(async move { fetch_via_api(client).await.map(RawBatch::Api) })
    }
}

/// The `data` array of an API payload; anything else reads as an empty list.
pub(crate) fn data_array(payload: Value) -> Vec<Value> {
    match payload {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Fetch the raw list from the query endpoint.
///
/// # Errors
///
/// Fails on transport errors, non-2xx statuses and bodies that are not JSON.
pub async fn fetch_via_api(client: &HotClient) -> Result<Vec<RawApiItem>, HotError> {
    let url = client.api_url().clone();
    let headers = api_headers(client.hot_url().as_str(), client.user_agent(), client.cookie());

    let req = client.http().get(url.clone()).headers(headers);
    let resp = net::send_checked(req, &url).await?;
    let body = net::get_text(resp, "hot_api").await?;

    let payload: Value = serde_json::from_str(&body)?;
    let items: Vec<RawApiItem> = data_array(payload)
        .into_iter()
        .map(RawApiItem::from_value)
        .collect();
    tracing::debug!(count = items.len(), "api payload decoded");
    Ok(items)
}
