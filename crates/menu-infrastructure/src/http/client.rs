//! Shared HTTP client and request helpers

use menu_core::GatewayError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Plain client: no timeout, no retry, no auth headers.
pub fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Single round trip; any non-2xx status is a failure regardless of code.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, GatewayError> {
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!("Remote API responded {}: {}", status, body);
        return Err(GatewayError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}
