//! `ZoneRecordClient` implementation for Domeneshop

use crate::client::{Domain, DomeneshopClient, build_http_client};
use crate::error::DomeneshopError;
use crate::DOMENESHOP_API_BASE;
use async_trait::async_trait;
use domeneshop_webhook_core::{ClientFactory, Credentials, Result, SolverError, Zone, ZoneRecordClient};

#[async_trait]
impl ZoneRecordClient for DomeneshopClient {
    async fn get_zone_by_name(&self, domain: &str) -> Result<Zone> {
        let domain = self.get_domain_by_name(domain).await?;
        Ok(Zone::new(domain.id.to_string(), domain.domain))
    }

    async fn create_txt_record(&self, zone: &Zone, name: &str, value: &str) -> Result<()> {
        self.ensure_txt_record(&to_domain(zone)?, name, value).await?;
        Ok(())
    }

    async fn delete_txt_record(&self, zone: &Zone, name: &str, value: &str) -> Result<()> {
        self.remove_txt_record(&to_domain(zone)?, name, value).await?;
        Ok(())
    }
}

fn to_domain(zone: &Zone) -> Result<Domain> {
    let id = zone.id.parse::<i64>().map_err(|_| {
        SolverError::Config(format!(
            "zone '{}' has a non-numeric Domeneshop id '{}'",
            zone.name, zone.id
        ))
    })?;

    Ok(Domain {
        id,
        domain: zone.name.clone(),
    })
}

/// Builds per-request [`DomeneshopClient`]s
///
/// Holds only the endpoint and a pooled HTTP client; credentials are
/// supplied per call.
#[derive(Debug, Clone)]
pub struct DomeneshopConnector {
    http: reqwest::Client,
    base_url: String,
}

impl DomeneshopConnector {
    pub fn new() -> std::result::Result<Self, DomeneshopError> {
        Self::with_base_url(DOMENESHOP_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> std::result::Result<Self, DomeneshopError> {
        Ok(Self {
            http: build_http_client()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ClientFactory for DomeneshopConnector {
    type Client = DomeneshopClient;

    fn connect(&self, credentials: Credentials) -> Result<DomeneshopClient> {
        Ok(DomeneshopClient::from_parts(
            self.http.clone(),
            self.base_url.clone(),
            credentials,
        ))
    }
}
