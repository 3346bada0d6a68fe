//! Kubernetes-backed secret store
//!
//! Reads `v1/Secret` objects through the API server. Needs `get` on
//! `secrets` in every namespace that issuers reference.

use crate::error::{Result, SecretError};
use crate::store::{SecretData, SecretStore};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use tracing::debug;

/// Secret store backed by the Kubernetes API
#[derive(Clone)]
pub struct KubeSecretStore {
    client: Client,
}

impl KubeSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a store from an explicit client config
    pub fn from_config(config: kube::Config) -> Result<Self> {
        let client = Client::try_from(config)
            .map_err(|e| SecretError::Store(format!("failed to create Kubernetes client: {}", e)))?;
        Ok(Self::new(client))
    }

    /// Build a store from in-cluster config or the local kubeconfig
    pub async fn infer() -> Result<Self> {
        let config = kube::Config::infer()
            .await
            .map_err(|e| SecretError::Store(format!("failed to load Kubernetes config: {}", e)))?;
        Self::from_config(config)
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<SecretData> {
        debug!(namespace = %namespace, secret = %name, "Fetching secret");

        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = api
            .get(name)
            .await
            .map_err(|e| map_kube_error(e, namespace, name))?;

        Ok(secret
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, value.0))
            .collect())
    }
}

fn map_kube_error(err: kube::Error, namespace: &str, name: &str) -> SecretError {
    match err {
        kube::Error::Api(response) if response.code == 404 => SecretError::SecretNotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        kube::Error::Api(response) if response.code == 401 || response.code == 403 => {
            SecretError::Forbidden {
                namespace: namespace.to_string(),
                name: name.to_string(),
                message: response.message,
            }
        }
        other => SecretError::Store(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    fn api_error(code: u16, reason: &str) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: format!("secrets \"domeneshop\" {}", reason),
            reason: reason.to_string(),
            code,
        })
    }

    #[test]
    fn test_map_not_found() {
        let err = map_kube_error(api_error(404, "NotFound"), "cert-manager", "domeneshop");
        assert!(matches!(
            err,
            SecretError::SecretNotFound { ref namespace, ref name }
                if namespace == "cert-manager" && name == "domeneshop"
        ));
    }

    #[test]
    fn test_map_forbidden() {
        let err = map_kube_error(api_error(403, "Forbidden"), "cert-manager", "domeneshop");
        assert!(matches!(err, SecretError::Forbidden { .. }));
    }

    #[test]
    fn test_map_server_error() {
        let err = map_kube_error(api_error(500, "InternalError"), "cert-manager", "domeneshop");
        assert!(matches!(err, SecretError::Store(_)));
    }
}
