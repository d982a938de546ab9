// HTTP transport seam

use crate::types::{DnsimpleResult, Verb};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// A fully assembled wire request, ready for a single HTTP exchange.
///
/// The client computes every field up front so transports stay dumb: they
/// never inspect credentials or invent headers of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Verb,
    pub url: String,
    pub headers: HashMap<String, String>,
    /// Username/password pair for HTTP basic authentication, when the
    /// resolved mode uses it
    pub basic_auth: Option<(String, String)>,
    pub body: Option<Value>,
    pub query: Option<Vec<(String, String)>>,
}

/// The raw wire response: status code plus the undecoded body text
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub code: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one HTTP exchange and hand back whatever the server said.
    /// Implementations fail only on connection-level problems; a non-success
    /// status is still a response.
    async fn send(&self, request: TransportRequest) -> DnsimpleResult<TransportResponse>;
}

/// Production transport backed by reqwest
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> DnsimpleResult<TransportResponse> {
        let method = match request.method {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http_client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some((username, password)) = &request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let code = response.status().as_u16();
        let body = response.text().await?;
        debug!("received status {} ({} byte body)", code, body.len());

        Ok(TransportResponse { code, body })
    }
}
