//! Domeneshop REST API client
//!
//! Direct API implementation using HTTP basic auth (token as user, secret
//! as password). Endpoints used:
//!
//! - `GET    /domains`
//! - `GET    /domains/{domainId}/dns?host=&type=`
//! - `POST   /domains/{domainId}/dns`
//! - `DELETE /domains/{domainId}/dns/{recordId}`

use crate::error::{DomeneshopError, Result};
use crate::CHALLENGE_TTL;
use domeneshop_webhook_core::Credentials;
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("domeneshop-webhook/", env!("CARGO_PKG_VERSION"));

/// Authenticated Domeneshop API client
#[derive(Debug, Clone)]
pub struct DomeneshopClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl DomeneshopClient {
    /// Wrap an existing HTTP client (shares its connection pool)
    pub fn from_parts(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every domain in the account
    ///
    /// The API returns the whole list in one response; there is no paging.
    pub async fn list_domains(&self) -> Result<Vec<Domain>> {
        let url = format!("{}/domains", self.base_url);

        let response = self
            .client
            .get(&url)
            .basic_auth(self.credentials.token(), Some(self.credentials.secret()))
            .send()
            .await?;

        let response = check_response(response, "list domains").await?;
        Ok(response.json().await?)
    }

    /// Find the domain that owns `name`
    ///
    /// Exact match first, then the longest registered parent domain.
    pub async fn get_domain_by_name(&self, name: &str) -> Result<Domain> {
        let domains = self.list_domains().await?;

        let domain = find_matching_domain(name, &domains)
            .cloned()
            .ok_or_else(|| DomeneshopError::DomainNotFound(name.to_string()))?;

        debug!(name = %name, domain = %domain.domain, domain_id = domain.id, "Found domain");
        Ok(domain)
    }

    /// List DNS records of a domain, optionally filtered by host and type
    pub async fn list_records(
        &self,
        domain_id: i64,
        host: Option<&str>,
        record_type: Option<&str>,
    ) -> Result<Vec<DnsRecord>> {
        let url = format!("{}/domains/{}/dns", self.base_url, domain_id);

        let mut query = Vec::new();
        if let Some(host) = host {
            query.push(("host", host));
        }
        if let Some(record_type) = record_type {
            query.push(("type", record_type));
        }

        let response = self
            .client
            .get(&url)
            .basic_auth(self.credentials.token(), Some(self.credentials.secret()))
            .query(&query)
            .send()
            .await?;

        let response = check_response(response, "list DNS records").await?;
        Ok(response.json().await?)
    }

    /// Create a DNS record, returning its id
    pub async fn create_record(&self, domain_id: i64, record: &NewRecord) -> Result<i64> {
        let url = format!("{}/domains/{}/dns", self.base_url, domain_id);

        let response = self
            .client
            .post(&url)
            .basic_auth(self.credentials.token(), Some(self.credentials.secret()))
            .json(record)
            .send()
            .await?;

        let response = check_response(response, "create DNS record").await?;
        let created: CreatedRecord = response.json().await?;
        Ok(created.id)
    }

    /// Delete a DNS record
    ///
    /// A record that is already gone (HTTP 404) counts as deleted.
    pub async fn delete_record(&self, domain_id: i64, record_id: i64) -> Result<()> {
        let url = format!("{}/domains/{}/dns/{}", self.base_url, domain_id, record_id);

        let response = self
            .client
            .delete(&url)
            .basic_auth(self.credentials.token(), Some(self.credentials.secret()))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(domain_id, record_id, "DNS record already deleted");
            return Ok(());
        }

        check_response(response, "delete DNS record").await?;
        Ok(())
    }

    /// Ensure a TXT record with exactly this host and value exists
    pub async fn ensure_txt_record(&self, domain: &Domain, host: &str, data: &str) -> Result<()> {
        let existing = self.list_records(domain.id, Some(host), Some("TXT")).await?;

        if let Some(record) = existing.iter().find(|r| r.matches_txt(host, data)) {
            debug!(
                domain = %domain.domain,
                host = %host,
                record_id = record.id,
                "TXT record already exists"
            );
            return Ok(());
        }

        let record = NewRecord::txt(host, data);
        match self.create_record(domain.id, &record).await {
            Ok(record_id) => {
                info!(domain = %domain.domain, host = %host, record_id, "Created TXT record");
                Ok(())
            }
            Err(DomeneshopError::Conflict(message)) => {
                debug!(domain = %domain.domain, host = %host, %message, "TXT record already exists");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Remove TXT records matching both host and value
    ///
    /// Returns the number of records deleted. Records under the same host
    /// with other values are kept.
    pub async fn remove_txt_record(&self, domain: &Domain, host: &str, data: &str) -> Result<usize> {
        let records = self.list_records(domain.id, Some(host), Some("TXT")).await?;

        let mut deleted = 0;
        for record in records.iter().filter(|r| r.matches_txt(host, data)) {
            self.delete_record(domain.id, record.id).await?;
            info!(domain = %domain.domain, host = %host, record_id = record.id, "Deleted TXT record");
            deleted += 1;
        }

        if deleted == 0 {
            debug!(domain = %domain.domain, host = %host, "TXT record not found, nothing to delete");
        }

        Ok(deleted)
    }
}

pub(crate) fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| DomeneshopError::InvalidConfig(format!("failed to create HTTP client: {}", e)))
}

async fn check_response(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|e| e.help.or(e.code))
        .unwrap_or(body);

    Err(DomeneshopError::from_status(
        status,
        format!("{} failed: {}", action, detail.trim()),
    ))
}

/// Pick the registered domain owning `name`
///
/// Tries `name` itself, then each parent in turn, so the longest
/// registered suffix wins.
pub fn find_matching_domain<'a>(name: &str, domains: &'a [Domain]) -> Option<&'a Domain> {
    let name = name.strip_suffix('.').unwrap_or(name);
    let lookup = |candidate: &str| {
        domains
            .iter()
            .find(|d| d.domain.eq_ignore_ascii_case(candidate))
    };

    if let Some(domain) = lookup(name) {
        return Some(domain);
    }

    let mut current = name;
    while let Some(pos) = current.find('.') {
        current = &current[pos + 1..];
        if let Some(domain) = lookup(current) {
            return Some(domain);
        }
    }

    None
}

// ============ API Types ============

/// Domain registered in the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: i64,
    pub domain: String,
}

/// DNS record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: i64,
    pub host: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(rename = "type")]
    pub r#type: String,
    pub data: String,
}

impl DnsRecord {
    fn matches_txt(&self, host: &str, data: &str) -> bool {
        self.r#type.eq_ignore_ascii_case("TXT")
            && self.host.eq_ignore_ascii_case(host)
            && self.data == data
    }
}

/// Request body for record creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub host: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub r#type: String,
    pub data: String,
}

impl NewRecord {
    pub fn txt(host: &str, data: &str) -> Self {
        Self {
            host: host.to_string(),
            ttl: CHALLENGE_TTL,
            r#type: "TXT".to_string(),
            data: data.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedRecord {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    help: Option<String>,
}
