use crate::{
    client_utils, routes::PROBE_ROUTE, WikiBackend, WikiEntry, WikiError, WikiQuery, WikiResult,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::collections::HashMap;

const BACKEND: &str = "hoyoverse";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Talks to the `hoyoverse` server plugin over HTTP.
pub struct HttpWikiBackend {
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct HttpWikiBackendOptions {
    /// Origin of the host server. Defaults to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    /// Extra headers sent with every request, e.g. the host's CSRF token.
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl HttpWikiBackend {
    #[must_use]
    pub fn new(options: HttpWikiBackendOptions) -> Self {
        let HttpWikiBackendOptions {
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            base_url,
            client,
            headers,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }

    fn request_headers(&self) -> WikiResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                WikiError::InvalidConfig(format!("Invalid header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                WikiError::InvalidConfig(format!("Invalid header value for '{key}': {error}"))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl WikiBackend for HttpWikiBackend {
    fn name(&self) -> &'static str {
        BACKEND
    }

    async fn probe(&self) -> bool {
        let headers = match self.request_headers() {
            Ok(headers) => headers,
            Err(error) => {
                tracing::debug!(%error, "could not probe wiki backend");
                return false;
            }
        };
        client_utils::send_probe(&self.client, &self.url(PROBE_ROUTE), headers).await
    }

    async fn fetch_entry(&self, route: &'static str, query: &WikiQuery) -> WikiResult<WikiEntry> {
        crate::opentelemetry::trace_fetch(BACKEND, route, query, || async move {
            let headers = self.request_headers()?;
            let entries: Vec<WikiEntry> =
                client_utils::send_json(&self.client, &self.url(route), query, headers).await?;

            entries.into_iter().next().ok_or_else(|| {
                WikiError::MalformedResponse("Response contained no wiki entry".to_string())
            })
        })
        .await
    }
}
