//! Resource-specific API implementations
//!
//! This module contains specialized clients for the API's resource families.
//! Each service client implements the `ServiceClient` and `ServiceOperations`
//! traits and exposes targeted operations for one resource.
//!
//! ## Architecture
//!
//! The service client system uses a trait-based approach:
//!
//! - `ServiceClient` trait: Identifies the resource a client serves
//! - `ServiceOperations` trait: Shared helpers for payload unwrapping
//! - `BaseServiceClient`: Implements both traits and serves as a composition base
//!
//! Service clients use composition rather than inheritance by containing a
//! `BaseServiceClient` instance and delegating trait implementations to it.
//!
//! ## Example: Creating a Custom Service Client
//!
//! ```rust
//! use dnsimple_rs::{Dnsimple, DnsimpleResult, RequestOptions};
//! use dnsimple_rs::services::{ServiceClient, ServiceOperations, base::BaseServiceClient};
//! use std::sync::Arc;
//!
//! struct CertificatesClient {
//!     base: BaseServiceClient,
//! }
//!
//! impl CertificatesClient {
//!     pub fn new(client: Arc<Dnsimple>) -> Self {
//!         Self {
//!             base: BaseServiceClient::new(client, "certificates"),
//!         }
//!     }
//!
//!     pub async fn list(&self, domain: &str) -> DnsimpleResult<serde_json::Value> {
//!         let response = self
//!             .client()
//!             .get(&format!("v1/domains/{}/certificates", domain), RequestOptions::new())
//!             .await?;
//!         Ok(response.data)
//!     }
//! }
//!
//! impl ServiceClient for CertificatesClient {
//!     fn service_name(&self) -> &str {
//!         self.base.service_name()
//!     }
//! }
//!
//! impl ServiceOperations for CertificatesClient {
//!     fn client(&self) -> &Dnsimple {
//!         self.base.client()
//!     }
//! }
//! ```

pub mod base;
pub mod domains;
pub mod name_servers;

// Re-export service clients
pub use domains::{Domain, DomainsClient};
pub use name_servers::NameServersClient;

use crate::types::{DnsimpleError, DnsimpleResult};
use crate::Dnsimple;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// Common trait for all service clients
///
/// This trait defines the common interface that all service clients must
/// implement. It provides resource identification for the registry system.
pub trait ServiceClient: Send + Sync {
    /// The resource name for this client
    fn service_name(&self) -> &str;
}

/// Common implementation for service operations
pub trait ServiceOperations: ServiceClient {
    /// Get a reference to the API client
    fn client(&self) -> &Dnsimple;

    /// Unwrap a single-key envelope such as `{"domain": {...}}` into its
    /// inner value, whatever the key is called
    fn unwrap_envelope<'a>(&self, entry: &'a Value) -> Option<&'a Value> {
        entry.as_object().and_then(|map| map.values().next())
    }

    /// Collect the inner values of a list of single-key envelopes, keeping
    /// the response order. Entries that are not envelopes are skipped.
    fn unwrap_collection<'a>(&self, entries: &'a Value) -> DnsimpleResult<Vec<&'a Value>> {
        let list = entries.as_array().ok_or_else(|| {
            DnsimpleError::serialization(
                format!("expected a list of {} entries", self.service_name()),
                Some(entries.to_string()),
            )
        })?;
        Ok(list
            .iter()
            .filter_map(|entry| self.unwrap_envelope(entry))
            .collect())
    }
}

/// Registry for service clients that provides a central access point.
/// This allows for both direct accessor methods and the services() method
/// approach.
pub struct ServiceRegistry {
    client: Arc<Dnsimple>,
    // Cached instances of the service clients
    name_servers_client: OnceLock<Arc<NameServersClient>>,
    domains_client: OnceLock<Arc<DomainsClient>>,
}

impl ServiceRegistry {
    /// Create a new service registry associated with an API client
    pub(crate) fn new(client: Arc<Dnsimple>) -> Self {
        Self {
            client,
            name_servers_client: OnceLock::new(),
            domains_client: OnceLock::new(),
        }
    }

    /// Get a name-server client (optimized with caching)
    pub fn name_servers(&self) -> Arc<NameServersClient> {
        self.name_servers_client
            .get_or_init(|| Arc::new(NameServersClient::new(self.client.clone())))
            .clone()
    }

    /// Get a domains client (optimized with caching)
    pub fn domains(&self) -> Arc<DomainsClient> {
        self.domains_client
            .get_or_init(|| Arc::new(DomainsClient::new(self.client.clone())))
            .clone()
    }
}
