//! # Tenant Resolution
//!
//! Decides which tenant an inbound request belongs to, independent of the
//! transport it arrived on. Resolution order:
//!
//! 1. single-tenant deployment with a default ID: the default
//! 2. tenant already in the parent context: the parent as is
//! 3. tenant derived from the request host (or path parameter)
//! 4. configured default ID
//! 5. no tenant, if empty tenants are allowed
//!
//! Anything else is [`TenantError::MissingTenant`].

use crate::config::TenancyConfig;
use crate::entities::TenantIdentifiers;
use crate::errors::TenantError;
use crate::license::MultiTenancySignal;
use crate::tenant::TenantContext;
use crate::validation::validate_id;
use std::sync::Arc;
use tracing::debug;

/// Extract a tenant ID from a host name.
///
/// The port is dropped. With base domains configured, the first matching
/// base domain is stripped from the end together with the dot before it.
/// Without base domains, everything up to the first `.` is taken. Returns
/// `None` if nothing valid remains.
#[must_use]
pub fn tenant_from_host(value: &str, config: &TenancyConfig) -> Option<String> {
    let host = strip_port(value);

    let candidate = if config.base_domains.is_empty() {
        host.split('.').next().unwrap_or_default()
    } else {
        let stripped = config
            .base_domains
            .iter()
            .find_map(|domain| host.strip_suffix(domain.as_str()))
            .unwrap_or(host);
        stripped.strip_suffix('.').unwrap_or(stripped)
    };

    if candidate.is_empty() {
        return None;
    }
    match validate_id(candidate) {
        Ok(()) => Some(candidate.to_string()),
        Err(e) => {
            debug!(value = %value, candidate = %candidate, error = %e, "Ignoring invalid tenant ID");
            None
        }
    }
}

fn strip_port(value: &str) -> &str {
    match value.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => host,
        _ => value,
    }
}

/// Maps requests onto tenant contexts.
pub struct TenantResolver {
    config: TenancyConfig,
    license: Arc<dyn MultiTenancySignal>,
}

impl std::fmt::Debug for TenantResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantResolver")
            .field("config", &self.config)
            .field("multi_tenancy", &self.license.require_multi_tenancy())
            .finish()
    }
}

impl TenantResolver {
    pub fn new(config: TenancyConfig, license: Arc<dyn MultiTenancySignal>) -> Self {
        Self { config, license }
    }

    #[must_use]
    pub fn config(&self) -> &TenancyConfig {
        &self.config
    }

    /// Resolve the tenant for a request identified by `value` (a host name
    /// or a path parameter).
    pub fn resolve(&self, parent: &TenantContext, value: &str) -> Result<TenantContext, TenantError> {
        let default_id = self.config.default_id.as_deref().filter(|id| !id.is_empty());

        if !self.license.require_multi_tenancy() {
            if let Some(id) = default_id {
                debug!(tenant_id = %id, "Single-tenant deployment, using default tenant");
                return Ok(parent.with_tenant(TenantIdentifiers::new(id)));
            }
        }

        if let Some(tenant) = parent.tenant() {
            debug!(tenant_id = %tenant.tenant_id, "Tenant already in context");
            return Ok(parent.clone());
        }

        if let Some(id) = tenant_from_host(value, &self.config) {
            debug!(value = %value, tenant_id = %id, "Derived tenant from request");
            return Ok(parent.with_tenant(TenantIdentifiers::new(id)));
        }

        if let Some(id) = default_id {
            debug!(value = %value, tenant_id = %id, "Falling back to default tenant");
            return Ok(parent.with_tenant(TenantIdentifiers::new(id)));
        }

        if self.config.allow_empty {
            debug!(value = %value, "No tenant, empty tenant allowed");
            return Ok(parent.clone());
        }

        Err(TenantError::MissingTenant {
            value: value.to_string(),
        })
    }
}
