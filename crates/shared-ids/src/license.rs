//! Multi-tenancy signal supplied by the licensing collaborator.

use std::sync::Arc;

/// Answers whether the deployment is licensed for multiple tenants.
pub trait MultiTenancySignal: Send + Sync {
    /// `true` when multi-tenancy is required (and therefore enabled).
    fn require_multi_tenancy(&self) -> bool;
}

/// A fixed answer, for deployments that read the flag from configuration and
/// for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticLicense {
    pub multi_tenancy: bool,
}

impl StaticLicense {
    #[must_use]
    pub const fn multi_tenant() -> Self {
        Self {
            multi_tenancy: true,
        }
    }

    #[must_use]
    pub const fn single_tenant() -> Self {
        Self {
            multi_tenancy: false,
        }
    }
}

impl MultiTenancySignal for StaticLicense {
    fn require_multi_tenancy(&self) -> bool {
        self.multi_tenancy
    }
}

impl<T: MultiTenancySignal + ?Sized> MultiTenancySignal for Arc<T> {
    fn require_multi_tenancy(&self) -> bool {
        (**self).require_multi_tenancy()
    }
}

impl<T: MultiTenancySignal + ?Sized> MultiTenancySignal for &T {
    fn require_multi_tenancy(&self) -> bool {
        (**self).require_multi_tenancy()
    }
}
