//! # Tenant Context
//!
//! Request-scoped carrier of the current tenant.
//!
//! A context is never mutated. [`TenantContext::with_tenant`] returns a child
//! layered on the parent, and the child owns a `tenant` tracing span so that
//! work done on behalf of the tenant can be instrumented with `tenant_id`.

use crate::entities::TenantIdentifiers;
use std::sync::Arc;
use tracing::Span;

/// Immutable, layered tenant context.
#[derive(Debug, Clone)]
pub struct TenantContext {
    tenant: Option<TenantIdentifiers>,
    parent: Option<Arc<TenantContext>>,
    span: Span,
}

impl Default for TenantContext {
    fn default() -> Self {
        Self::background()
    }
}

impl TenantContext {
    /// Root context with no tenant.
    #[must_use]
    pub fn background() -> Self {
        Self {
            tenant: None,
            parent: None,
            span: Span::none(),
        }
    }

    /// Derive a child context carrying `tenant`.
    ///
    /// The parent is left untouched and remains reachable through
    /// [`TenantContext::parent`].
    ///
    /// An empty `tenant` does not shadow an inherited one: the child still
    /// reports the parent's tenant. Once a context has a tenant, no
    /// descendant can clear it.
    #[must_use]
    pub fn with_tenant(&self, tenant: TenantIdentifiers) -> Self {
        let span = tracing::info_span!(parent: &self.span, "tenant", tenant_id = %tenant.tenant_id);
        Self {
            tenant: Some(tenant),
            parent: Some(Arc::new(self.clone())),
            span,
        }
    }

    /// Shorthand for [`TenantContext::with_tenant`] from a raw ID string.
    #[must_use]
    pub fn with_tenant_id(&self, tenant_id: impl Into<String>) -> Self {
        self.with_tenant(TenantIdentifiers::new(tenant_id))
    }

    /// The nearest non-empty tenant in this context or its ancestors.
    #[must_use]
    pub fn tenant(&self) -> Option<&TenantIdentifiers> {
        match &self.tenant {
            Some(tenant) if !tenant.is_zero() => Some(tenant),
            _ => self.parent.as_deref().and_then(TenantContext::tenant),
        }
    }

    /// The nearest tenant ID, if any.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant().map(|tenant| tenant.tenant_id.as_str())
    }

    /// The context this one was derived from.
    #[must_use]
    pub fn parent(&self) -> Option<&TenantContext> {
        self.parent.as_deref()
    }

    /// Tracing span of the tenant derivation. Disabled for the background
    /// context.
    #[must_use]
    pub fn span(&self) -> &Span {
        &self.span
    }
}
