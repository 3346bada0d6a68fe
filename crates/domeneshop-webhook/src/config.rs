//! Process-wide webhook configuration
//!
//! Built once at startup and handed to the solver; nothing reads the
//! environment after that.

use domeneshop_api::DOMENESHOP_API_BASE;
use domeneshop_webhook_core::{Result, SolverError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    group_name: String,
    api_url: String,
}

impl WebhookConfig {
    /// Create a config for the given API group
    ///
    /// Fails if the group name is empty.
    pub fn new(group_name: impl Into<String>) -> Result<Self> {
        let group_name = group_name.into().trim().to_string();
        if group_name.is_empty() {
            return Err(SolverError::Config("GROUP_NAME must be specified".to_string()));
        }

        Ok(Self {
            group_name,
            api_url: DOMENESHOP_API_BASE.to_string(),
        })
    }

    /// Override the Domeneshop API endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}
