//! # Shared IDs Crate
//!
//! Tenant-scoped entity addressing shared by every crate in the workspace.
//!
//! ## Contents
//!
//! - **Validation**: syntax rule for identifier segments and tenant IDs.
//! - **Entities**: typed identifiers for applications, clients, end devices,
//!   gateways, organizations and users.
//! - **Codec**: `local-id@tenant-id` unique IDs, encoded from a
//!   [`TenantContext`] and decoded back into typed identifiers.
//! - **Tenancy**: the immutable tenant context, tenancy configuration and
//!   the resolver that maps inbound requests onto tenants.
//!
//! ## Example
//!
//! ```
//! use shared_ids::{decode_device, encode, EndDeviceIdentifiers, TenantContext};
//!
//! let ctx = TenantContext::background().with_tenant_id("foo-tenant");
//! let ids = EndDeviceIdentifiers::new("foo-app", "foo-device");
//! let uid = encode(&ctx, &ids).unwrap();
//! assert_eq!(uid, "foo-app.foo-device@foo-tenant");
//! assert_eq!(decode_device(&uid).unwrap(), ids);
//! ```

pub mod codec;
pub mod config;
pub mod entities;
pub mod errors;
pub mod license;
pub mod resolver;
pub mod tenant;
pub mod validation;

/// Separates the local part of a unique ID from the tenant.
pub const TENANT_SEPARATOR: char = '@';

/// Separates the application ID from the device ID in a device's local part.
pub const DEVICE_SEPARATOR: char = '.';

pub use codec::{
    decode, decode_application, decode_client, decode_device, decode_entity, decode_gateway,
    decode_organization, decode_tenant, decode_user, derive_context, encode, UniqueId,
};
pub use config::TenancyConfig;
pub use entities::*;
pub use errors::*;
pub use license::{MultiTenancySignal, StaticLicense};
pub use resolver::{tenant_from_host, TenantResolver};
pub use tenant::TenantContext;
pub use validation::{is_valid_id, validate_id, IdSyntaxError, MAX_ID_LENGTH, MIN_ID_LENGTH};
