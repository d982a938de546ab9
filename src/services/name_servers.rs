use crate::services::base::BaseServiceClient;
use crate::services::{ServiceClient, ServiceOperations};
use crate::types::{DnsimpleResult, RequestOptions};
use crate::Dnsimple;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Client for the name-server operations of a domain
pub struct NameServersClient {
    base: BaseServiceClient,
}

impl NameServersClient {
    /// Create a new name-server client
    pub fn new(client: Arc<Dnsimple>) -> Self {
        Self {
            base: BaseServiceClient::new(client, "name_servers"),
        }
    }

    /// List the name servers currently assigned to `domain`, in the order
    /// the API reports them
    pub async fn list(&self, domain: &str) -> DnsimpleResult<Vec<String>> {
        let response = self
            .client()
            .get(
                &format!("v1/domains/{}/name_servers", domain),
                RequestOptions::new(),
            )
            .await?;
        Ok(self.extract_names(&response.data))
    }

    /// Point `domain` at the given name servers.
    ///
    /// The assignment is keyed `ns1` through `nsN` following the order of
    /// `names`; an empty slice submits an empty assignment. Returns the
    /// name servers the API reports after the change.
    pub async fn change(&self, domain: &str, names: &[&str]) -> DnsimpleResult<Vec<String>> {
        let mut assignment = Map::new();
        for (position, name) in names.iter().enumerate() {
            assignment.insert(
                format!("ns{}", position + 1),
                Value::String((*name).to_string()),
            );
        }

        let options = RequestOptions::new().with_body(json!({ "name_servers": assignment }));
        let response = self
            .client()
            .post(&format!("v1/domains/{}/name_servers", domain), options)
            .await?;
        Ok(self.extract_names(&response.data))
    }

    /// Register `name` as a registry name server of `domain`, glued to `ip`
    pub async fn register(&self, domain: &str, name: &str, ip: &str) -> DnsimpleResult<()> {
        let options =
            RequestOptions::new().with_body(json!({ "name_server": { "name": name, "ip": ip } }));
        self.client()
            .post(
                &format!("v1/domains/{}/registry_name_servers", domain),
                options,
            )
            .await?;
        Ok(())
    }

    /// Remove `name` from the registry name servers of `domain`
    pub async fn deregister(&self, domain: &str, name: &str) -> DnsimpleResult<()> {
        self.client()
            .delete(
                &format!("v1/domains/{}/registry_name_servers/{}", domain, name),
                RequestOptions::new(),
            )
            .await?;
        Ok(())
    }

    /// Host names from the payload's `name_servers` list. Each entry is a
    /// single-key mapping whose value is the host name; the key itself is
    /// ignored. Entries of any other shape are skipped.
    fn extract_names(&self, data: &Value) -> Vec<String> {
        data.get("name_servers")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| self.unwrap_envelope(entry))
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl ServiceClient for NameServersClient {
    fn service_name(&self) -> &str {
        self.base.service_name()
    }
}

impl ServiceOperations for NameServersClient {
    fn client(&self) -> &Dnsimple {
        self.base.client()
    }
}
