//! [`Transport`] implementation backed by `reqwest`

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use super::{QueryPairs, Transport};
use crate::error::{AppError, AppResult};

/// HTTP transport talking to a single API base URL
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport for the API at `base_url`, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a transport reusing an existing [`reqwest::Client`]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, with exactly one slash at the junction
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            return base.to_string();
        }
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Request for `path`; reqwest encodes the query pairs
    fn request(
        &self,
        method: Method,
        path: &str,
        query: &QueryPairs,
        body: Option<&Value>,
    ) -> RequestBuilder {
        let mut request = self.client.request(method, self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: QueryPairs,
        body: Option<Value>,
    ) -> AppResult<Value> {
        let url = self.url(path);
        tracing::debug!("{} {} {:?}", method, url, query);

        let response = self
            .request(method.clone(), path, &query, body.as_ref())
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!("{} {} failed with {}", method, url, status);
            return Err(AppError::Http {
                status,
                body: serde_json::from_slice(&bytes).ok(),
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|source| AppError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
