//! Solver error taxonomy

use thiserror::Error;

/// Errors returned from Present / CleanUp
///
/// Messages name the namespace, secret, key or zone involved so that
/// misconfiguration can be diagnosed. They never contain credential values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Malformed or incomplete configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Secret, secret key or DNS zone is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// The DNS provider or secret store rejected our credentials
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Network, rate-limit or server-side failure
    #[error("Transient error: {0}")]
    Transient(String),
}

impl SolverError {
    /// Whether re-invoking the same call later may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, SolverError::Transient(_))
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SolverError::NotFound("zone 'example.com'".to_string());
        assert_eq!(err.to_string(), "Not found: zone 'example.com'");

        let err = SolverError::Config("apiTokenSecretRef.name is empty".to_string());
        assert!(err.to_string().contains("apiTokenSecretRef.name"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(SolverError::Transient("HTTP 503".into()).is_retryable());
        assert!(!SolverError::Auth("HTTP 401".into()).is_retryable());
        assert!(!SolverError::NotFound("x".into()).is_retryable());
        assert!(!SolverError::Config("x".into()).is_retryable());
    }
}
