use crate::core::HotError;
use url::Url;

/// Send a request and turn any non-2xx status into [`HotError::Status`].
pub(crate) async fn send_checked(
    req: reqwest::RequestBuilder,
    url: &Url,
) -> Result<reqwest::Response, HotError> {
    let resp = req.send().await?;
    if !resp.status().is_success() {
        return Err(HotError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp)
}

/// Read the response body as text, logging its size.
pub(crate) async fn get_text(resp: reqwest::Response, endpoint: &str) -> Result<String, HotError> {
    let text = resp.text().await?;
    tracing::debug!(endpoint, bytes = text.len(), "response body received");
    Ok(text)
}
