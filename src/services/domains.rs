use crate::services::base::BaseServiceClient;
use crate::services::{ServiceClient, ServiceOperations};
use crate::types::{DnsimpleError, DnsimpleResult, RequestOptions};
use crate::Dnsimple;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// A domain in the account, registered or hosted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Domain {
    /// The domain name
    pub name: String,
    /// Numeric record id
    #[serde(default)]
    pub id: Option<u64>,
    /// Lifecycle state as the API reports it
    #[serde(default)]
    pub state: Option<String>,
    /// Domain-scoped API token, when the API includes one
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub auto_renew: Option<bool>,
    #[serde(default)]
    pub whois_protected: Option<bool>,
    #[serde(default)]
    pub expires_on: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Client for domain operations
pub struct DomainsClient {
    base: BaseServiceClient,
}

impl DomainsClient {
    /// Create a new domains client
    pub fn new(client: Arc<Dnsimple>) -> Self {
        Self {
            base: BaseServiceClient::new(client, "domains"),
        }
    }

    /// List all domains in the account, in the order the API reports them
    pub async fn list(&self) -> DnsimpleResult<Vec<Domain>> {
        let response = self.client().get("v1/domains", RequestOptions::new()).await?;
        let entries = self.unwrap_collection(&response.data)?;
        entries
            .into_iter()
            .map(|entry| self.decode_domain(entry))
            .collect()
    }

    /// Fetch a single domain by name or numeric id
    pub async fn find(&self, domain: &str) -> DnsimpleResult<Domain> {
        let response = self
            .client()
            .get(&format!("v1/domains/{}", domain), RequestOptions::new())
            .await?;
        self.decode_enveloped(&response.data)
    }

    /// Create a hosted domain named `name` in the account
    pub async fn create(&self, name: &str) -> DnsimpleResult<Domain> {
        let options = RequestOptions::new().with_body(json!({ "domain": { "name": name } }));
        let response = self.client().post("v1/domains", options).await?;
        self.decode_enveloped(&response.data)
    }

    /// Delete `domain` from the account
    pub async fn delete(&self, domain: &str) -> DnsimpleResult<()> {
        self.client()
            .delete(&format!("v1/domains/{}", domain), RequestOptions::new())
            .await?;
        Ok(())
    }

    fn decode_enveloped(&self, data: &Value) -> DnsimpleResult<Domain> {
        let entry = self.unwrap_envelope(data).ok_or_else(|| {
            DnsimpleError::serialization("expected a domain envelope", Some(data.to_string()))
        })?;
        self.decode_domain(entry)
    }

    fn decode_domain(&self, entry: &Value) -> DnsimpleResult<Domain> {
        serde_json::from_value(entry.clone()).map_err(|err| {
            DnsimpleError::serialization(
                format!("malformed domain entry: {}", err),
                Some(entry.to_string()),
            )
        })
    }
}

impl ServiceClient for DomainsClient {
    fn service_name(&self) -> &str {
        self.base.service_name()
    }
}

impl ServiceOperations for DomainsClient {
    fn client(&self) -> &Dnsimple {
        self.base.client()
    }
}
