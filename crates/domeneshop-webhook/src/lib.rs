//! cert-manager webhook solver for Domeneshop
//!
//! Answers ACME DNS-01 challenges by publishing and retracting TXT records
//! through the Domeneshop API, using credentials stored in Kubernetes
//! secrets referenced from the issuer config.
//!
//! # Issuer config
//!
//! ```yaml
//! solvers:
//!   - dns01:
//!       webhook:
//!         groupName: acme.example.com
//!         solverName: domeneshop
//!         config:
//!           apiTokenSecretRef:
//!             name: domeneshop-credentials
//!             key: token
//!           apiSecretSecretRef:
//!             name: domeneshop-credentials
//!             key: secret
//! ```
//!
//! # Example
//!
//! ```ignore
//! use domeneshop_webhook::{DomeneshopSolver, WebhookConfig};
//! use domeneshop_webhook_core::Solver;
//! use domeneshop_webhook_secrets::KubeSecretStore;
//!
//! let config = WebhookConfig::new("acme.example.com")?;
//! let mut solver = DomeneshopSolver::from_config(&config)?;
//! solver.initialize(KubeSecretStore::infer().await?).await?;
//!
//! solver.present(&request).await?;
//! solver.cleanup(&request).await?;
//! ```

pub mod config;
pub mod solver;
pub mod version;

pub use config::WebhookConfig;
pub use solver::{DomeneshopSolver, SOLVER_NAME};
pub use version::{VersionInfo, version_info};
