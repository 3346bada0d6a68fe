//! Credential resolver
//!
//! Resolves `(namespace, secret, key)` references to string values.
//! Resolved values are never logged.

use crate::error::{Result, SecretError};
use crate::store::SecretStore;
use domeneshop_webhook_core::{Credentials, ProviderConfig, SecretKeySelector};
use tracing::debug;

/// Resolves secret key references against a [`SecretStore`]
pub struct CredentialResolver<S> {
    store: S,
}

impl<S: SecretStore> CredentialResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch a single key from a secret
    ///
    /// Surrounding whitespace is trimmed; secrets created from files often
    /// end in a newline.
    pub async fn resolve(&self, namespace: &str, secret_name: &str, secret_key: &str) -> Result<String> {
        debug!(namespace = %namespace, secret = %secret_name, key = %secret_key, "Resolving secret key");

        let data = self.store.get_secret(namespace, secret_name).await?;

        let value = data.get(secret_key).ok_or_else(|| SecretError::KeyNotFound {
            key: secret_key.to_string(),
            namespace: namespace.to_string(),
            name: secret_name.to_string(),
        })?;

        let value = std::str::from_utf8(value).map_err(|_| SecretError::InvalidUtf8 {
            key: secret_key.to_string(),
            namespace: namespace.to_string(),
            name: secret_name.to_string(),
        })?;

        Ok(value.trim().to_string())
    }

    async fn resolve_selector(&self, namespace: &str, selector: &SecretKeySelector) -> Result<String> {
        self.resolve(namespace, &selector.name, &selector.key).await
    }

    /// Resolve the API token and secret referenced by a solver config
    pub async fn resolve_credentials(
        &self,
        namespace: &str,
        config: &ProviderConfig,
    ) -> domeneshop_webhook_core::Result<Credentials> {
        let token = self
            .resolve_selector(namespace, &config.api_token_secret_ref)
            .await?;
        let secret = self
            .resolve_selector(namespace, &config.api_secret_secret_ref)
            .await?;

        Ok(Credentials::new(token, secret))
    }
}
