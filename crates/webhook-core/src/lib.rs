//! Domeneshop webhook core
//!
//! Shared types for answering ACME DNS-01 challenges on behalf of
//! cert-manager: the challenge request, the per-issuer provider config,
//! the error taxonomy, and the traits the solver is assembled from.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            dispatcher (cert-manager)             │
//! │            Present / CleanUp requests            │
//! └─────────────────┬───────────────────────────────┘
//!                   │  trait Solver
//! ┌─────────────────▼───────────────────────────────┐
//! │               DomeneshopSolver                   │
//! └───────┬─────────────────┬───────────────────────┘
//!         │                 │
//! ┌───────▼───────┐ ┌───────▼───────────────┐
//! │  SecretStore  │ │   ZoneRecordClient     │
//! │ (credentials) │ │ (zones + TXT records)  │
//! └───────────────┘ └───────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod request;
pub mod solver;

// Re-exports
pub use config::{ProviderConfig, SecretKeySelector};
pub use error::{Result, SolverError};
pub use provider::{ClientFactory, Credentials, Zone, ZoneRecordClient};
pub use request::{ChallengeAction, ChallengeRequest, relative_record_name, un_fqdn};
pub use solver::{Solver, dispatch};
