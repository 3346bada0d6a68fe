//! DNS provider abstraction
//!
//! The solver only needs three things from a DNS provider: find the zone
//! that owns a name, and create or delete one TXT record in it. Records are
//! identified by `(zone, name, value)`, never by a provider record id.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Provider-assigned identity of a DNS zone
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone {
    /// Provider-internal id
    pub id: String,

    /// Registered domain name (no trailing dot)
    pub name: String,
}

impl Zone {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// API token and secret for the DNS provider
///
/// Held in memory only for the duration of one Present/CleanUp call.
/// `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    secret: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Zone lookup and TXT record management for one authenticated account
#[async_trait]
pub trait ZoneRecordClient: Send + Sync {
    /// Find the zone registered for `domain`
    ///
    /// Matches the exact zone or, failing that, the longest registered
    /// parent. Fails with `NotFound` if the account owns neither.
    async fn get_zone_by_name(&self, domain: &str) -> Result<Zone>;

    /// Publish a TXT record
    ///
    /// Succeeds if an identical record already exists.
    async fn create_txt_record(&self, zone: &Zone, name: &str, value: &str) -> Result<()>;

    /// Remove the TXT record(s) matching both `name` and `value`
    ///
    /// Records under the same name with other values are left alone.
    /// Succeeds if nothing matches.
    async fn delete_txt_record(&self, zone: &Zone, name: &str, value: &str) -> Result<()>;
}

/// Builds an authenticated [`ZoneRecordClient`] from resolved credentials
pub trait ClientFactory: Send + Sync {
    type Client: ZoneRecordClient;

    fn connect(&self, credentials: Credentials) -> Result<Self::Client>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials::new("tok-123", "sec-456");
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("tok-123"));
        assert!(!debug.contains("sec-456"));
        assert!(debug.contains("<redacted>"));
        assert_eq!(credentials.token(), "tok-123");
        assert_eq!(credentials.secret(), "sec-456");
    }
}
