// Core client implementation

use crate::auth::Credentials;
use crate::services::{DomainsClient, NameServersClient, ServiceRegistry};
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
use crate::types::{ApiResponse, DnsimpleError, DnsimpleResult, RequestOptions, Verb};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error};

/// Production API endpoint, used when no other endpoint is configured
pub const DEFAULT_API_ENDPOINT: &str = "https://api.dnsimple.com/";

/// User-Agent header sent with every request
pub const USER_AGENT: &str = concat!("dnsimple-rs/", env!("CARGO_PKG_VERSION"));

/// Client for the DNSimple API.
///
/// Construction never validates credentials; they are resolved when a
/// request is executed, so an unconfigured client can be built and
/// inspected freely.
#[derive(Clone)]
pub struct Dnsimple {
    pub(crate) transport: Arc<dyn Transport>,
    api_endpoint: String,
    credentials: Credentials,
    services: Arc<OnceLock<Arc<ServiceRegistry>>>,
}

impl Dnsimple {
    /// Create a new client pointed at the production API
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            credentials: Credentials::new(),
            services: Arc::new(OnceLock::new()),
        }
    }

    /// Set the API endpoint. A missing trailing slash is appended so path
    /// joining stays uniform.
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        self.api_endpoint = endpoint;
        self
    }

    /// Set the account username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_username(username);
        self
    }

    /// Set the account password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_password(password);
        self
    }

    /// Set the two-factor exchange token
    pub fn with_exchange_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_exchange_token(token);
        self
    }

    /// Set the account API token
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_api_token(token);
        self
    }

    /// Set a domain-scoped API token
    pub fn with_domain_api_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_domain_api_token(token);
        self
    }

    /// Replace the whole credential set at once
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Replace the HTTP transport. Tests use this to intercept the wire.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// The configured endpoint, always terminated with a slash
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// The configured credential set
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Issue a GET request against `path`
    pub async fn get(&self, path: &str, options: RequestOptions) -> DnsimpleResult<ApiResponse> {
        self.execute(Verb::Get, path, options).await
    }

    /// Issue a POST request against `path`
    pub async fn post(&self, path: &str, options: RequestOptions) -> DnsimpleResult<ApiResponse> {
        self.execute(Verb::Post, path, options).await
    }

    /// Issue a PUT request against `path`
    pub async fn put(&self, path: &str, options: RequestOptions) -> DnsimpleResult<ApiResponse> {
        self.execute(Verb::Put, path, options).await
    }

    /// Issue a DELETE request against `path`
    pub async fn delete(&self, path: &str, options: RequestOptions) -> DnsimpleResult<ApiResponse> {
        self.execute(Verb::Delete, path, options).await
    }

    /// Perform one exchange and classify the outcome.
    ///
    /// This is the mapped form of [`Dnsimple::request`]: success statuses
    /// come back as a decoded [`ApiResponse`], everything else as the
    /// matching [`DnsimpleError`] variant.
    pub async fn execute(
        &self,
        method: Verb,
        path: &str,
        options: RequestOptions,
    ) -> DnsimpleResult<ApiResponse> {
        let response = self.request(method, path, options).await?;
        map_response(response)
    }

    /// Perform one exchange and return the raw status and body, skipping
    /// response classification. Callers that need to inspect non-success
    /// bodies themselves use this instead of [`Dnsimple::execute`].
    pub async fn request(
        &self,
        method: Verb,
        path: &str,
        options: RequestOptions,
    ) -> DnsimpleResult<TransportResponse> {
        let request = self.build_request(method, path, options)?;
        debug!("{} {}", request.method, request.url);
        self.transport.send(request).await
    }

    /// Assemble the wire request: resolve credentials, join the URL and
    /// merge headers. Fails without touching the network when no usable
    /// credentials are configured.
    fn build_request(
        &self,
        method: Verb,
        path: &str,
        options: RequestOptions,
    ) -> DnsimpleResult<TransportRequest> {
        let auth = self.credentials.resolve()?;

        let url = format!("{}{}", self.api_endpoint, path.trim_start_matches('/'));

        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
        if let Some((name, value)) = auth.header() {
            headers.insert(name.to_string(), value);
        }
        // Caller-supplied headers win over the computed defaults
        if let Some(overrides) = options.headers {
            headers.extend(overrides);
        }

        Ok(TransportRequest {
            method,
            url,
            headers,
            basic_auth: auth.basic_auth(),
            body: options.body,
            query: options.query,
        })
    }

    /// The lazily-built registry of resource service clients
    pub fn services(&self) -> Arc<ServiceRegistry> {
        self.services
            .get_or_init(|| {
                let client = Arc::new(self.clone());
                Arc::new(ServiceRegistry::new(client))
            })
            .clone()
    }

    /// Client for name-server operations
    pub fn name_servers(&self) -> Arc<NameServersClient> {
        self.services().name_servers()
    }

    /// Client for domain operations
    pub fn domains(&self) -> Arc<DomainsClient> {
        self.services().domains()
    }
}

impl Default for Dnsimple {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a raw response.
///
/// The rules apply in order and the first match wins:
/// any 2xx decodes the body (an empty body decodes as JSON null);
/// 401 or 403 carrying the two-factor marker becomes
/// [`DnsimpleError::TwoFactorAuthenticationRequired`]; 404 becomes
/// [`DnsimpleError::NotFound`]; every other status becomes
/// [`DnsimpleError::Request`] with the numeric code.
pub fn map_response(response: TransportResponse) -> DnsimpleResult<ApiResponse> {
    let TransportResponse { code, body } = response;
    match code {
        200..=299 => Ok(ApiResponse {
            code,
            data: decode_success_body(&body)?,
        }),
        401 | 403 if has_two_factor_marker(&body) => {
            error!("request rejected with status {}: two-factor required", code);
            Err(DnsimpleError::two_factor_required(decoded_error_message(
                &body,
            )))
        }
        404 => {
            error!("request failed with status 404");
            Err(DnsimpleError::not_found(decoded_error_message(&body)))
        }
        code => {
            error!("request failed with status {}", code);
            Err(DnsimpleError::request(code, decoded_error_message(&body)))
        }
    }
}

/// Decode a success body. The API answers some operations with no content,
/// which decodes as JSON null rather than an error.
fn decode_success_body(body: &str) -> DnsimpleResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|err| {
        DnsimpleError::serialization(err.to_string(), Some(body.to_string()))
    })
}

/// The API flags a pending second factor with a fixed marker in the error
/// body of a 401/403 response
fn has_two_factor_marker(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|payload| {
            payload
                .get("error")
                .and_then(Value::as_str)
                .map(|kind| kind == "two_factor_authentication_required")
        })
        .unwrap_or(false)
}

/// Error envelopes usually carry a human-readable `message` member
fn decoded_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(String::from)
}
