//! Tenancy configuration from environment variables.

use crate::errors::ConfigError;
use crate::validation::validate_id;
use serde::{Deserialize, Serialize};
use std::env;

/// How inbound requests are mapped onto tenants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenancyConfig {
    /// Tenant used when none can be derived from the request
    pub default_id: Option<String>,

    /// Base domains stripped from host names to find the tenant ID
    pub base_domains: Vec<String>,

    /// Whether requests without any tenant are let through
    pub allow_empty: bool,
}

impl TenancyConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TENANCY_DEFAULT_ID`: Default tenant ID (default: none)
    /// - `TENANCY_BASE_DOMAINS`: Comma-separated base domains (default: none)
    /// - `TENANCY_ALLOW_EMPTY`: Allow requests without tenant (default: false)
    pub fn from_env() -> Self {
        Self {
            default_id: env::var("TENANCY_DEFAULT_ID")
                .ok()
                .filter(|v| !v.is_empty()),

            base_domains: env::var("TENANCY_BASE_DOMAINS")
                .map(|v| parse_base_domains(&v))
                .unwrap_or_default(),

            allow_empty: env::var("TENANCY_ALLOW_EMPTY")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Check the configured values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(tenant_id) = &self.default_id {
            validate_id(tenant_id).map_err(|source| ConfigError::InvalidDefaultTenant {
                tenant_id: tenant_id.clone(),
                source,
            })?;
        }
        if let Some(index) = self.base_domains.iter().position(|d| d.trim().is_empty()) {
            return Err(ConfigError::EmptyBaseDomain { index });
        }
        Ok(())
    }
}

fn parse_base_domains(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}
