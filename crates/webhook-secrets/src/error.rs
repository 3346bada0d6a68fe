//! Secret store error types

use domeneshop_webhook_core::SolverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret '{namespace}/{name}' not found")]
    SecretNotFound { namespace: String, name: String },

    #[error("key {key} not found in secret '{namespace}/{name}'")]
    KeyNotFound {
        key: String,
        namespace: String,
        name: String,
    },

    #[error("key {key} in secret '{namespace}/{name}' is not valid UTF-8")]
    InvalidUtf8 {
        key: String,
        namespace: String,
        name: String,
    },

    #[error("access to secret '{namespace}/{name}' denied: {message}")]
    Forbidden {
        namespace: String,
        name: String,
        message: String,
    },

    #[error("secret store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SecretError>;

impl From<SecretError> for SolverError {
    fn from(err: SecretError) -> Self {
        let message = err.to_string();
        match err {
            SecretError::SecretNotFound { .. } | SecretError::KeyNotFound { .. } => {
                SolverError::NotFound(message)
            }
            SecretError::InvalidUtf8 { .. } => SolverError::Config(message),
            SecretError::Forbidden { .. } => SolverError::Auth(message),
            SecretError::Store(_) => SolverError::Transient(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_message() {
        let err = SecretError::KeyNotFound {
            key: "token".to_string(),
            namespace: "cert-manager".to_string(),
            name: "domeneshop".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "key token not found in secret 'cert-manager/domeneshop'"
        );
    }

    #[test]
    fn test_into_solver_error() {
        let err: SolverError = SecretError::SecretNotFound {
            namespace: "ns".to_string(),
            name: "creds".to_string(),
        }
        .into();
        assert_eq!(err, SolverError::NotFound("secret 'ns/creds' not found".to_string()));

        let err: SolverError = SecretError::Store("connection refused".to_string()).into();
        assert!(err.is_retryable());

        let err: SolverError = SecretError::Forbidden {
            namespace: "ns".to_string(),
            name: "creds".to_string(),
            message: "secrets is forbidden".to_string(),
        }
        .into();
        assert!(matches!(err, SolverError::Auth(_)));
    }
}
