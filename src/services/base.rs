//! Base implementation for resource service clients.
//!
//! This module provides the foundation for service client implementations,
//! including the shared payload-unwrapping helpers.

use crate::services::{ServiceClient, ServiceOperations};
use crate::Dnsimple;
use std::sync::Arc;

/// Base client for resource service implementations
/// Provides common functionality for all service clients
pub struct BaseServiceClient {
    /// Reference to the API client
    client: Arc<Dnsimple>,
    /// Resource name for this client
    service_name: String,
}

impl BaseServiceClient {
    /// Create a new base service client
    pub fn new(client: Arc<Dnsimple>, service_name: impl Into<String>) -> Self {
        Self {
            client,
            service_name: service_name.into(),
        }
    }
}

impl ServiceClient for BaseServiceClient {
    fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl ServiceOperations for BaseServiceClient {
    fn client(&self) -> &Dnsimple {
        &self.client
    }
}
