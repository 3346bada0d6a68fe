//! Credential resolution for the Domeneshop webhook
//!
//! Looks up the Domeneshop API token and secret referenced by a solver
//! config. Every call goes to the secret store; nothing is cached, so
//! rotated secrets take effect on the next challenge.
//!
//! # Example
//!
//! ```ignore
//! use domeneshop_webhook_secrets::{CredentialResolver, KubeSecretStore};
//!
//! let store = KubeSecretStore::infer().await?;
//! let resolver = CredentialResolver::new(store);
//!
//! let token = resolver.resolve("cert-manager", "domeneshop", "token").await?;
//! ```

pub mod error;
pub mod kubernetes;
pub mod memory;
pub mod resolver;
pub mod store;

pub use error::{Result, SecretError};
pub use kubernetes::KubeSecretStore;
pub use memory::InMemorySecretStore;
pub use resolver::CredentialResolver;
pub use store::{SecretData, SecretStore};
