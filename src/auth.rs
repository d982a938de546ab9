// Credential storage and authentication mode selection

use crate::types::{DnsimpleError, DnsimpleResult};
use std::fmt;
use std::ops::Deref;

/// Header carrying a domain-scoped API token
pub const DOMAIN_TOKEN_HEADER: &str = "X-Dnsimple-Domain-Token";

/// Header carrying an account API token, paired with the username
pub const API_TOKEN_HEADER: &str = "X-Dnsimple-Token";

/// Fixed basic-auth password used when authenticating with an exchange token
pub const EXCHANGE_TOKEN_PASSWORD: &str = "x-2fa-basic";

pub(crate) const MISSING_CREDENTIALS_MESSAGE: &str =
    "A password or API token is required for all API requests.";

/// A secure container for secrets that automatically zeroes memory when dropped
pub struct SecureCredential {
    value: String,
}

impl SecureCredential {
    /// Create a new secure credential
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Get a reference to the underlying secret
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Implement Deref for convenience in assembling header values
impl Deref for SecureCredential {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

// Implement Drop to zero memory when the credential is dropped
impl Drop for SecureCredential {
    fn drop(&mut self) {
        // Overwrite the string with zeros to remove sensitive data from memory
        unsafe {
            let bytes = self.value.as_bytes_mut();
            bytes.iter_mut().for_each(|b| *b = 0);
        }
    }
}

// Prevent accidental printing of secrets in logs/debug output
impl fmt::Debug for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureCredential([REDACTED])")
    }
}

// Display implementation also redacts the secret
impl fmt::Display for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED CREDENTIAL]")
    }
}

// Clone implementation for SecureCredential
impl Clone for SecureCredential {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl PartialEq for SecureCredential {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SecureCredential {}

/// The credential fields accepted at client construction.
///
/// Any combination may be set; which authentication mode applies is decided
/// by [`Credentials::resolve`] when a request is executed, never earlier.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<SecureCredential>,
    pub exchange_token: Option<SecureCredential>,
    pub api_token: Option<SecureCredential>,
    pub domain_api_token: Option<SecureCredential>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecureCredential::new(password));
        self
    }

    pub fn with_exchange_token(mut self, token: impl Into<String>) -> Self {
        self.exchange_token = Some(SecureCredential::new(token));
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecureCredential::new(token));
        self
    }

    pub fn with_domain_api_token(mut self, token: impl Into<String>) -> Self {
        self.domain_api_token = Some(SecureCredential::new(token));
        self
    }

    /// Select the active authentication mode.
    ///
    /// The checks run in a fixed order and the first match wins:
    /// a domain token beats a username/API-token pair, which beats the
    /// exchange-token flow, which beats plain basic authentication.
    /// With no usable combination this fails with an authentication error.
    pub fn resolve(&self) -> DnsimpleResult<Authentication> {
        if let Some(token) = &self.domain_api_token {
            return Ok(Authentication::DomainToken {
                token: token.clone(),
            });
        }

        if let (Some(username), Some(token)) = (&self.username, &self.api_token) {
            return Ok(Authentication::ApiToken {
                username: username.clone(),
                token: token.clone(),
            });
        }

        if let (Some(_), Some(_), Some(token)) =
            (&self.username, &self.password, &self.exchange_token)
        {
            return Ok(Authentication::ExchangeToken {
                token: token.clone(),
            });
        }

        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            return Ok(Authentication::HttpBasic {
                username: username.clone(),
                password: password.clone(),
            });
        }

        Err(DnsimpleError::authentication(MISSING_CREDENTIALS_MESSAGE))
    }
}

/// A resolved authentication artifact. Exactly one mode applies per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    /// Sent as the `X-Dnsimple-Domain-Token` header
    DomainToken { token: SecureCredential },
    /// Sent as the `X-Dnsimple-Token` header, value `username:token`
    ApiToken {
        username: String,
        token: SecureCredential,
    },
    /// HTTP basic auth pairing the exchange token with a fixed password
    ExchangeToken { token: SecureCredential },
    /// HTTP basic auth with the plain username/password pair
    HttpBasic {
        username: String,
        password: SecureCredential,
    },
}

impl Authentication {
    /// The custom request header this mode transmits, if any
    pub fn header(&self) -> Option<(&'static str, String)> {
        match self {
            Authentication::DomainToken { token } => {
                Some((DOMAIN_TOKEN_HEADER, token.as_str().to_string()))
            }
            Authentication::ApiToken { username, token } => Some((
                API_TOKEN_HEADER,
                format!("{}:{}", username, token.as_str()),
            )),
            _ => None,
        }
    }

    /// The basic-auth pair this mode transmits, if any
    pub fn basic_auth(&self) -> Option<(String, String)> {
        match self {
            Authentication::ExchangeToken { token } => Some((
                token.as_str().to_string(),
                EXCHANGE_TOKEN_PASSWORD.to_string(),
            )),
            Authentication::HttpBasic { username, password } => {
                Some((username.clone(), password.as_str().to_string()))
            }
            _ => None,
        }
    }
}
