//! In-memory secret store

use crate::error::{Result, SecretError};
use crate::store::{SecretData, SecretStore};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Secret store held in process memory
///
/// Useful for local runs and tests. Counts lookups so callers can check
/// whether the store was consulted at all.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    secrets: RwLock<HashMap<(String, String), SecretData>>,
    lookups: AtomicUsize,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a secret
    pub fn insert<K, V>(&self, namespace: &str, name: &str, data: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        let data = data
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.secrets
            .write()
            .insert((namespace.to_string(), name.to_string()), data);
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_secret<K, V>(
        self,
        namespace: &str,
        name: &str,
        data: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        self.insert(namespace, name, data);
        self
    }

    pub fn remove(&self, namespace: &str, name: &str) -> Option<SecretData> {
        self.secrets
            .write()
            .remove(&(namespace.to_string(), name.to_string()))
    }

    /// Number of `get_secret` calls served so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<SecretData> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        self.secrets
            .read()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| SecretError::SecretNotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}
