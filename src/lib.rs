//! # dnsimple-rs: A Rust client for the DNSimple API
//!
//! This crate provides a typed interface to the DNSimple v1 API, with
//! service clients for resource families like name servers and domains,
//! plus raw request access for everything else.
//!
//! ## Key Features
//!
//! - Every documented authentication mode: HTTP basic, account API token,
//!   domain API token and the two-factor exchange-token flow
//! - One error taxonomy covering authentication, HTTP and decoding failures
//! - Service clients composed over a shared request executor
//! - A swappable transport so tests never touch the network
//! - Secure credential handling with memory zeroing
//!
//! ## Basic Usage
//!
//! ```no_run
//! use dnsimple_rs::{Dnsimple, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client with account credentials
//!     let client = Dnsimple::new()
//!         .with_username("user@example.com")
//!         .with_api_token("api-token");
//!
//!     // List the name servers of a domain
//!     let servers = client.name_servers().list("example.com").await?;
//!     for server in servers {
//!         println!("{}", server);
//!     }
//!
//!     // Raw access is available for endpoints without a service client
//!     let response = client.get("v1/user", RequestOptions::new()).await?;
//!     println!("{}", response.data);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod services;
pub mod transport;
pub mod types;

// Re-export core components
pub use client::{map_response, Dnsimple, DEFAULT_API_ENDPOINT, USER_AGENT};
pub use types::{
    sanitize_error_message, ApiResponse, DnsimpleError, DnsimpleResult, RequestOptions, Verb,
};
pub use auth::{Authentication, Credentials, SecureCredential};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

pub mod prelude {
    //! Convenient imports for commonly used types and functions
    pub use crate::auth::{Authentication, Credentials, SecureCredential};
    pub use crate::services::{Domain, DomainsClient, NameServersClient};
    pub use crate::transport::{Transport, TransportRequest, TransportResponse};
    pub use crate::{
        from_env, ApiResponse, Dnsimple, DnsimpleError, DnsimpleResult, RequestOptions, Verb,
    };
}

// Public service access
pub use services::{
    // Base traits
    ServiceClient,
    ServiceOperations,

    // Resource-specific client types
    DomainsClient,
    NameServersClient,
};

pub use services::domains::Domain;

/// Crate version, reported in the User-Agent header of every request
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a client from `DNSIMPLE_*` environment variables.
///
/// Recognized variables are `DNSIMPLE_API_ENDPOINT`, `DNSIMPLE_USERNAME`,
/// `DNSIMPLE_PASSWORD`, `DNSIMPLE_API_TOKEN` and `DNSIMPLE_DOMAIN_API_TOKEN`.
/// Absent variables leave the matching field unset; whether the resulting
/// combination is usable is only decided when a request is executed.
pub fn from_env() -> Dnsimple {
    let mut client = Dnsimple::new();
    if let Ok(endpoint) = std::env::var("DNSIMPLE_API_ENDPOINT") {
        client = client.with_api_endpoint(endpoint);
    }
    if let Ok(username) = std::env::var("DNSIMPLE_USERNAME") {
        client = client.with_username(username);
    }
    if let Ok(password) = std::env::var("DNSIMPLE_PASSWORD") {
        client = client.with_password(password);
    }
    if let Ok(token) = std::env::var("DNSIMPLE_API_TOKEN") {
        client = client.with_api_token(token);
    }
    if let Ok(token) = std::env::var("DNSIMPLE_DOMAIN_API_TOKEN") {
        client = client.with_domain_api_token(token);
    }
    client
}
