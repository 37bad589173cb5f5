#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use crate::core::{YfClient, YfError};

/// Read the response body as text.
/// In `test-mode`, if `YF_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _symbol: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("YF_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _symbol, _ext, &text)
        {
            eprintln!("YF_RECORD: failed to write fixture for {_symbol}: {e}");
        }
    }

    Ok(text)
}

/// Issue a single GET and return the body, mapping any non-2xx status to `YfError::Status`.
pub(crate) async fn fetch_text(
    client: &YfClient,
    url: Url,
    endpoint: &str,
    symbol: &str,
    ext: &str,
) -> Result<String, YfError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(%url, endpoint, "GET");

    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), %url, "upstream returned non-success status");
        return Err(YfError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let text = get_text(resp, endpoint, symbol, ext).await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = text.len(), endpoint, "response body read");

    Ok(text)
}
