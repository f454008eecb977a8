//! HTTP transport over reqwest.

use std::future::Future;

use url::Url;

use crate::dispatch::OutboundRequest;
use crate::transport::{Transport, TransportError};

/// Real transport sending requests over plaintext HTTP.
///
/// No request timeout is configured; a hanging service keeps the dispatch
/// task alive until the connection drops.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        request: OutboundRequest,
    ) -> impl Future<Output = Result<String, TransportError>> + Send {
        let client = self.client.clone();
        async move {
            let url: Url = request.url.parse().map_err(|e: url::ParseError| {
                TransportError::InvalidUrl {
                    url: request.url.clone(),
                    reason: e.to_string(),
                }
            })?;

            let response = client
                .request(request.method, url)
                .body(request.body)
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;

            tracing::debug!(status = %status, bytes = body.len(), "response received");

            // Status is deliberately not branched on: error bodies display
            // the same as success bodies.
            Ok(body)
        }
    }
}
