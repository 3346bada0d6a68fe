//! Domeneshop DNS-01 solver
//!
//! Present and CleanUp are independent transactions: each one decodes the
//! request config, resolves credentials, looks up the zone and then touches
//! exactly one TXT record. Nothing is remembered between calls.

use crate::config::WebhookConfig;
use async_trait::async_trait;
use domeneshop_api::DomeneshopConnector;
use domeneshop_webhook_core::{
    ChallengeRequest, ClientFactory, ProviderConfig, Result, Solver, SolverError, Zone,
    ZoneRecordClient, relative_record_name,
};
use domeneshop_webhook_secrets::{CredentialResolver, SecretStore};
use tracing::{debug, info};

/// Name the solver is registered under within the webhook group
pub const SOLVER_NAME: &str = "domeneshop";

/// DNS-01 solver backed by the Domeneshop API
pub struct DomeneshopSolver<S, F = DomeneshopConnector> {
    connector: F,
    resolver: Option<CredentialResolver<S>>,
}

/// Everything Present and CleanUp need before touching the record
struct Target<C> {
    client: C,
    zone: Zone,
    record_name: String,
}

impl<S: SecretStore> DomeneshopSolver<S, DomeneshopConnector> {
    /// Create a solver talking to the API endpoint in `config`
    pub fn from_config(config: &WebhookConfig) -> Result<Self> {
        let connector = DomeneshopConnector::with_base_url(config.api_url())?;
        Ok(Self::with_connector(connector))
    }
}

impl<S: SecretStore, F: ClientFactory> DomeneshopSolver<S, F> {
    pub fn with_connector(connector: F) -> Self {
        Self {
            connector,
            resolver: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.resolver.is_some()
    }

    /// The secret store wired up by `initialize`
    pub fn secret_store(&self) -> Option<&S> {
        self.resolver.as_ref().map(CredentialResolver::store)
    }

    fn resolver(&self) -> Result<&CredentialResolver<S>> {
        self.resolver.as_ref().ok_or_else(|| {
            SolverError::Config(format!("solver '{}' is not initialized", SOLVER_NAME))
        })
    }

    /// Shared by Present and CleanUp: config, credentials, client, zone, name
    async fn resolve_target(&self, request: &ChallengeRequest) -> Result<Target<F::Client>> {
        let config = ProviderConfig::from_json(request.config.as_ref())?;
        config.validate()?;

        if request.key.is_empty() {
            return Err(SolverError::Config(format!(
                "challenge for '{}' has an empty key",
                request.fqdn()
            )));
        }

        let credentials = self
            .resolver()?
            .resolve_credentials(&request.resource_namespace, &config)
            .await?;
        let client = self.connector.connect(credentials)?;

        let zone = client.get_zone_by_name(request.zone()).await?;
        let record_name = relative_record_name(request.fqdn(), &zone.name);

        debug!(
            fqdn = %request.fqdn(),
            zone = %zone.name,
            zone_id = %zone.id,
            record_name = %record_name,
            "Resolved challenge target"
        );

        Ok(Target {
            client,
            zone,
            record_name,
        })
    }
}

#[async_trait]
impl<S, F> Solver for DomeneshopSolver<S, F>
where
    S: SecretStore + 'static,
    F: ClientFactory + 'static,
{
    type Bootstrap = S;

    fn name(&self) -> &str {
        SOLVER_NAME
    }

    async fn initialize(&mut self, store: S) -> Result<()> {
        self.resolver = Some(CredentialResolver::new(store));
        info!(solver = SOLVER_NAME, "Solver initialized");
        Ok(())
    }

    async fn present(&self, request: &ChallengeRequest) -> Result<()> {
        info!(uid = %request.uid, fqdn = %request.fqdn(), zone = %request.zone(), "Presenting challenge");

        let target = self.resolve_target(request).await?;
        target
            .client
            .create_txt_record(&target.zone, &target.record_name, &request.key)
            .await
    }

    async fn cleanup(&self, request: &ChallengeRequest) -> Result<()> {
        info!(uid = %request.uid, fqdn = %request.fqdn(), zone = %request.zone(), "Cleaning up challenge");

        let target = self.resolve_target(request).await?;
        target
            .client
            .delete_txt_record(&target.zone, &target.record_name, &request.key)
            .await
    }
}
