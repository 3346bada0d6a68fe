//! Secret store trait definition

use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Key/value payload of a secret
pub type SecretData = BTreeMap<String, Vec<u8>>;

/// Namespaced key/value secret storage
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the payload of secret `name` in `namespace`
    ///
    /// Fails with [`SecretError::SecretNotFound`](crate::SecretError::SecretNotFound)
    /// if the secret does not exist.
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<SecretData>;
}
