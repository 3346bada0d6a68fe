//! ACME DNS-01 challenge request

use serde::{Deserialize, Serialize};

/// Host name Domeneshop uses for records at the zone apex
pub const APEX_HOST: &str = "@";

/// Which side of the challenge the dispatcher is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeAction {
    Present,
    CleanUp,
}

/// One DNS-01 challenge instance, as sent by cert-manager
///
/// Read-only to the solver. Names may arrive fully qualified (with a
/// trailing dot); use the accessors to get the normalized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// Unique id of the challenge resource
    #[serde(default)]
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ChallengeAction>,

    /// Challenge type, always "dns-01" for this solver
    #[serde(rename = "type", default)]
    pub challenge_type: String,

    /// Name being validated (e.g. "example.com" or "*.example.com")
    #[serde(default)]
    pub dns_name: String,

    /// TXT record value to publish
    pub key: String,

    /// Namespace used to look up credential secrets
    #[serde(default)]
    pub resource_namespace: String,

    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,

    pub resolved_zone: String,

    #[serde(default)]
    pub allow_ambient_credentials: bool,

    /// Opaque per-issuer solver configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

impl ChallengeRequest {
    pub fn new(
        resolved_zone: impl Into<String>,
        resolved_fqdn: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            challenge_type: "dns-01".to_string(),
            key: key.into(),
            resolved_fqdn: resolved_fqdn.into(),
            resolved_zone: resolved_zone.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.resource_namespace = namespace.into();
        self
    }

    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_action(mut self, action: ChallengeAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Zone name without the trailing dot
    pub fn zone(&self) -> &str {
        un_fqdn(&self.resolved_zone)
    }

    /// Record FQDN without the trailing dot
    pub fn fqdn(&self) -> &str {
        un_fqdn(&self.resolved_fqdn)
    }

    /// Record name relative to the resolved zone
    pub fn record_name(&self) -> String {
        relative_record_name(&self.resolved_fqdn, &self.resolved_zone)
    }
}

/// Strip a single trailing dot from a domain name
pub fn un_fqdn(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Make `fqdn` relative to `zone`
///
/// `_acme-challenge.example.com` in `example.com` becomes `_acme-challenge`.
/// A name equal to the zone maps to the apex host `@`. A name outside the
/// zone is returned as-is.
pub fn relative_record_name(fqdn: &str, zone: &str) -> String {
    let fqdn = un_fqdn(fqdn);
    let zone = un_fqdn(zone);

    if fqdn.eq_ignore_ascii_case(zone) {
        return APEX_HOST.to_string();
    }

    match fqdn.len().checked_sub(zone.len() + 1) {
        Some(split)
            if fqdn.is_char_boundary(split)
                && fqdn[split..].starts_with('.')
                && fqdn[split + 1..].eq_ignore_ascii_case(zone) =>
        {
            fqdn[..split].to_string()
        }
        _ => fqdn.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_un_fqdn() {
        assert_eq!(un_fqdn("example.com."), "example.com");
        assert_eq!(un_fqdn("example.com"), "example.com");
        assert_eq!(un_fqdn(""), "");
    }

    #[test]
    fn test_relative_record_name() {
        assert_eq!(
            relative_record_name("_acme-challenge.example.com", "example.com"),
            "_acme-challenge"
        );
        assert_eq!(
            relative_record_name("_acme-challenge.example.com.", "example.com."),
            "_acme-challenge"
        );
        assert_eq!(
            relative_record_name("_acme-challenge.www.example.com", "example.com"),
            "_acme-challenge.www"
        );
        assert_eq!(relative_record_name("example.com.", "example.com"), "@");
        assert_eq!(
            relative_record_name("_acme-challenge.Example.COM", "example.com"),
            "_acme-challenge"
        );
    }

    #[test]
    fn test_relative_record_name_requires_label_boundary() {
        assert_eq!(
            relative_record_name("_acme-challenge.notexample.com", "example.com"),
            "_acme-challenge.notexample.com"
        );
        assert_eq!(
            relative_record_name("other.org", "example.com"),
            "other.org"
        );
    }

    #[test]
    fn test_deserialize_cert_manager_request() {
        let json = r#"{
            "uid": "6b1e0a33-1f1c-4a56-a3b4-0d5cf3f8f7a2",
            "action": "Present",
            "type": "dns-01",
            "dnsName": "example.com",
            "key": "abc123",
            "resourceNamespace": "cert-manager",
            "resolvedFQDN": "_acme-challenge.example.com.",
            "resolvedZone": "example.com.",
            "allowAmbientCredentials": false,
            "config": {
                "apiTokenSecretRef": {"name": "domeneshop-credentials", "key": "token"},
                "apiSecretSecretRef": {"name": "domeneshop-credentials", "key": "secret"}
            }
        }"#;

        let request: ChallengeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.action, Some(ChallengeAction::Present));
        assert_eq!(request.challenge_type, "dns-01");
        assert_eq!(request.zone(), "example.com");
        assert_eq!(request.fqdn(), "_acme-challenge.example.com");
        assert_eq!(request.record_name(), "_acme-challenge");
        assert_eq!(request.resource_namespace, "cert-manager");
        assert!(request.config.is_some());
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{
            "key": "abc123",
            "resolvedFQDN": "_acme-challenge.example.com",
            "resolvedZone": "example.com"
        }"#;

        let request: ChallengeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.action, None);
        assert_eq!(request.config, None);
        assert_eq!(request.resource_namespace, "");
    }

    #[test]
    fn test_builder() {
        let request = ChallengeRequest::new("example.com", "_acme-challenge.example.com", "k")
            .with_namespace("default")
            .with_action(ChallengeAction::CleanUp);
        assert_eq!(request.resource_namespace, "default");
        assert_eq!(request.action, Some(ChallengeAction::CleanUp));
        assert_eq!(request.challenge_type, "dns-01");
    }
}
