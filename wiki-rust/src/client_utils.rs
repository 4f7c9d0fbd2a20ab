use crate::WikiError;
use reqwest::{header::HeaderMap, Client};
use serde::{de::DeserializeOwned, Serialize};

/// Send a bodyless POST and report whether it succeeded.
/// Transport errors are logged and read as failure.
pub async fn send_probe(client: &Client, url: &str, headers: HeaderMap) -> bool {
    match client.post(url).headers(headers).send().await {
        Ok(response) => response.status().is_success(),
        Err(error) => {
            tracing::debug!(url, %error, "could not probe wiki backend");
            false
        }
    }
}

/// Create a JSON request, parse the response.
/// Throws error on non-success status code, carrying the response body as is.
pub async fn send_json<T: Serialize + ?Sized, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
) -> Result<R, WikiError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(WikiError::RequestFailed {
            status,
            message: response.text().await.unwrap_or_default(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|error| {
        WikiError::MalformedResponse(format!("Failed to parse response body: {error}"))
    })
}
