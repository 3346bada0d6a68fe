//! Per-issuer provider configuration
//!
//! Set by users in `issuer.spec.acme.dns01.webhook.config`. It only carries
//! references to Kubernetes secrets, never credential values.

use crate::error::{Result, SolverError};
use serde::{Deserialize, Serialize};

/// Reference to one key of a secret in the request's namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeySelector {
    /// Secret name
    #[serde(default)]
    pub name: String,

    /// Key within the secret's data
    #[serde(default)]
    pub key: String,
}

impl SecretKeySelector {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// Decoded solver config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    pub api_token_secret_ref: SecretKeySelector,
    pub api_secret_secret_ref: SecretKeySelector,
}

impl ProviderConfig {
    /// Decode the opaque config blob of a challenge request
    ///
    /// A missing blob (or JSON `null`) yields the zero-value config.
    pub fn from_json(config: Option<&serde_json::Value>) -> Result<Self> {
        match config {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => Self::deserialize(value).map_err(|e| {
                SolverError::Config(format!("error decoding solver config: {}", e))
            }),
        }
    }

    /// Check that both secret references are complete
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("apiTokenSecretRef.name", &self.api_token_secret_ref.name),
            ("apiTokenSecretRef.key", &self.api_token_secret_ref.key),
            ("apiSecretSecretRef.name", &self.api_secret_secret_ref.name),
            ("apiSecretSecretRef.key", &self.api_secret_secret_ref.key),
        ];

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        if !missing.is_empty() {
            return Err(SolverError::Config(format!(
                "solver config is missing {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}
