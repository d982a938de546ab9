// Core types and errors

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The result type used throughout the DNSimple client
pub type DnsimpleResult<T> = Result<T, DnsimpleError>;

/// Convert reqwest::Error to our DnsimpleError
impl From<reqwest::Error> for DnsimpleError {
    fn from(err: reqwest::Error) -> Self {
        DnsimpleError::Transport {
            message: sanitize_error_message(&err.to_string()),
            source: Some(Arc::new(err) as Arc<dyn std::error::Error + Send + Sync>),
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum DnsimpleError {
    /// Credentials were missing or incomplete when a request was attempted
    #[error("{message}")]
    Authentication { message: String },

    /// The API rejected the request pending a second authentication factor
    #[error("two-factor authentication required")]
    TwoFactorAuthenticationRequired { message: Option<String> },

    /// The requested resource does not exist
    #[error("resource not found")]
    NotFound { message: Option<String> },

    /// The API answered with a non-success status
    #[error("API request failed with status {code}")]
    Request { code: u16, message: Option<String> },

    /// A response body could not be decoded as JSON
    #[error("failed to decode response body: {message}")]
    Serialization {
        message: String,
        body: Option<String>,
    },

    /// The HTTP exchange itself failed before a status was received
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },
}

impl DnsimpleError {
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    pub fn two_factor_required(message: Option<String>) -> Self {
        Self::TwoFactorAuthenticationRequired { message }
    }

    pub fn not_found(message: Option<String>) -> Self {
        Self::NotFound { message }
    }

    pub fn request(code: u16, message: Option<String>) -> Self {
        Self::Request { code, message }
    }

    pub fn serialization(message: impl Into<String>, body: Option<String>) -> Self {
        Self::Serialization {
            message: message.into(),
            body,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: sanitize_error_message(&message.into()),
            source: None,
        }
    }

    /// The server-provided message, when one was decoded from the error body
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Authentication { message } => Some(message),
            Self::TwoFactorAuthenticationRequired { message } => message.as_deref(),
            Self::NotFound { message } => message.as_deref(),
            Self::Request { message, .. } => message.as_deref(),
            Self::Serialization { message, .. } => Some(message),
            Self::Transport { message, .. } => Some(message),
        }
    }

    /// The HTTP status code, for errors that carry one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// HTTP methods accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request options. Each field is independent and optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// JSON request body
    pub body: Option<Value>,
    /// URL query parameters, appended in the order given
    pub query: Option<Vec<(String, String)>>,
    /// Extra headers; same-name entries override the computed defaults
    pub headers: Option<HashMap<String, String>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Set a header, overriding any computed default of the same name
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// A decoded success response: HTTP status plus the parsed JSON payload
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub code: u16,
    pub data: Value,
}

impl ApiResponse {
    /// Look up a top-level member of the payload
    pub fn member(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

// Pre-compile the token pattern once
lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new(r"[A-Za-z0-9_-]{20,}").unwrap();
}

/// Helper function to sanitize error messages to prevent leaking credentials
pub fn sanitize_error_message(message: &str) -> String {
    // Long opaque sequences are assumed to be tokens or passwords
    TOKEN_REGEX.replace_all(message, "[REDACTED]").into_owned()
}
