//! Domeneshop API error types

use domeneshop_webhook_core::SolverError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomeneshopError {
    #[error("Domeneshop rejected the API credentials: {0}")]
    Unauthorized(String),

    #[error("Domain not found in Domeneshop account: {0}")]
    DomainNotFound(String),

    #[error("Record already exists: {0}")]
    Conflict(String),

    #[error("Rate limited by Domeneshop: {0}")]
    RateLimited(String),

    #[error("Domeneshop server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Domeneshop API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl DomeneshopError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(message),
            s if s.is_server_error() => Self::Server {
                status: s.as_u16(),
                message,
            },
            s => Self::Api {
                status: s.as_u16(),
                message,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DomeneshopError>;

impl From<DomeneshopError> for SolverError {
    fn from(err: DomeneshopError) -> Self {
        let message = err.to_string();
        match err {
            DomeneshopError::Unauthorized(_) => SolverError::Auth(message),
            DomeneshopError::DomainNotFound(_) => SolverError::NotFound(message),
            DomeneshopError::RateLimited(_)
            | DomeneshopError::Server { .. }
            | DomeneshopError::Http(_) => SolverError::Transient(message),
            DomeneshopError::Conflict(_)
            | DomeneshopError::Api { .. }
            | DomeneshopError::InvalidConfig(_) => SolverError::Config(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            DomeneshopError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            DomeneshopError::Unauthorized(_)
        ));
        assert!(matches!(
            DomeneshopError::from_status(StatusCode::FORBIDDEN, String::new()),
            DomeneshopError::Unauthorized(_)
        ));
        assert!(matches!(
            DomeneshopError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            DomeneshopError::RateLimited(_)
        ));
        assert!(matches!(
            DomeneshopError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            DomeneshopError::Server { status: 502, .. }
        ));
        assert!(matches!(
            DomeneshopError::from_status(StatusCode::BAD_REQUEST, String::new()),
            DomeneshopError::Api { status: 400, .. }
        ));
    }

    #[test]
    fn test_into_solver_error() {
        let err: SolverError = DomeneshopError::DomainNotFound("example.com".into()).into();
        assert_eq!(
            err,
            SolverError::NotFound("Domain not found in Domeneshop account: example.com".into())
        );

        let err: SolverError = DomeneshopError::Server {
            status: 503,
            message: "maintenance".into(),
        }
        .into();
        assert!(err.is_retryable());

        let err: SolverError = DomeneshopError::Unauthorized("bad token".into()).into();
        assert!(matches!(err, SolverError::Auth(_)));
    }
}
