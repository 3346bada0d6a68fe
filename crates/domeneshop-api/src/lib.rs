//! Domeneshop DNS API client
//!
//! Talks to the Domeneshop REST API (v0) to find the domain that owns a
//! name and to publish or remove ACME challenge TXT records.
//!
//! # Requirements
//!
//! - A Domeneshop API token and secret (<https://domene.shop/admin?view=api>)
//!
//! # Example
//!
//! ```ignore
//! use domeneshop_api::DomeneshopConnector;
//! use domeneshop_webhook_core::{ClientFactory, Credentials};
//!
//! let client = DomeneshopConnector::new()?.connect(Credentials::new(token, secret))?;
//!
//! let domain = client.get_domain_by_name("example.com").await?;
//! client.ensure_txt_record(&domain, "_acme-challenge", "abc123").await?;
//! client.remove_txt_record(&domain, "_acme-challenge", "abc123").await?;
//! ```

pub mod client;
pub mod error;
pub mod provider;

pub use client::{DnsRecord, Domain, DomeneshopClient, NewRecord, find_matching_domain};
pub use error::{DomeneshopError, Result};
pub use provider::DomeneshopConnector;

/// Production API endpoint
pub const DOMENESHOP_API_BASE: &str = "https://api.domeneshop.no/v0";

/// TTL for challenge records, in seconds
pub const CHALLENGE_TTL: u32 = 60;
