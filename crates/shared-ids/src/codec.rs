//! # Unique ID Codec
//!
//! Encodes entity identifiers plus a tenant into `local-id@tenant-id` and
//! decodes such strings back into typed identifiers.
//!
//! ## Format
//!
//! - The first `@` separates the local part from the tenant part. Anything
//!   after a later `@` belongs to the tenant part.
//! - The local part is a single segment, or `application-id.device-id` for
//!   end devices, split on the first `.`.
//!
//! Decoding validates every local segment. The tenant part is only checked
//! for presence.

use crate::entities::{
    ApplicationIdentifiers, ClientIdentifiers, EndDeviceIdentifiers, EntityIdentifiers,
    EntityKind, GatewayIdentifiers, Identifiers, OrganizationIdentifiers, TenantIdentifiers,
    UserIdentifiers,
};
use crate::errors::{CodecError, InvalidReason};
use crate::tenant::TenantContext;
use crate::validation::validate_id;
use crate::{DEVICE_SEPARATOR, TENANT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// ENCODING
// =============================================================================

/// Encode `ids` into a unique ID scoped to the tenant of `ctx`.
///
/// # Errors
///
/// - [`CodecError::InvalidArgument`] if the local part is empty or starts or
///   ends with `.`
/// - [`CodecError::MissingTenant`] if `ctx` carries no tenant
///
/// # Panics
///
/// Panics if `ids` is absent or has no identifying field set. Callers must
/// only encode identifiers that exist.
#[track_caller]
pub fn encode<I: Identifiers>(ctx: &TenantContext, ids: I) -> Result<String, CodecError> {
    if ids.is_zero() {
        panic!(
            "unique ID precondition violated: cannot encode zero {} identifiers",
            ids.entity_kind().map_or("entity", |kind| kind.as_str())
        );
    }

    let local = ids.id_string();
    if local.is_empty() {
        return Err(CodecError::invalid(local, InvalidReason::Empty));
    }
    if local.starts_with(DEVICE_SEPARATOR) {
        return Err(CodecError::invalid(local, InvalidReason::StartsWithDot));
    }
    if local.ends_with(DEVICE_SEPARATOR) {
        return Err(CodecError::invalid(local, InvalidReason::EndsWithDot));
    }

    match ctx.tenant_id() {
        Some(tenant_id) => Ok(format!("{local}{TENANT_SEPARATOR}{tenant_id}")),
        None => Err(CodecError::MissingTenant { uid: local }),
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Split a unique ID into `(tenant, local)` on the first `@`.
///
/// # Errors
///
/// [`CodecError::MissingTenant`] if there is no `@` or nothing follows it.
pub fn decode(uid: &str) -> Result<(&str, &str), CodecError> {
    match uid.split_once(TENANT_SEPARATOR) {
        Some((local, tenant)) if !tenant.is_empty() => Ok((tenant, local)),
        _ => Err(CodecError::MissingTenant {
            uid: uid.to_string(),
        }),
    }
}

/// The tenant part of a unique ID. The tenant is not validated.
pub fn decode_tenant(uid: &str) -> Result<TenantIdentifiers, CodecError> {
    let (tenant, _) = decode(uid)?;
    Ok(TenantIdentifiers::new(tenant))
}

fn decode_segment(uid: &str, field: &'static str) -> Result<String, CodecError> {
    let (_, local) = decode(uid)?;
    validate_id(local).map_err(|e| CodecError::syntax(uid, field, e))?;
    Ok(local.to_string())
}

/// Decode application identifiers.
pub fn decode_application(uid: &str) -> Result<ApplicationIdentifiers, CodecError> {
    decode_segment(uid, "application_id").map(ApplicationIdentifiers::new)
}

/// Decode client identifiers.
pub fn decode_client(uid: &str) -> Result<ClientIdentifiers, CodecError> {
    decode_segment(uid, "client_id").map(ClientIdentifiers::new)
}

/// Decode gateway identifiers.
pub fn decode_gateway(uid: &str) -> Result<GatewayIdentifiers, CodecError> {
    decode_segment(uid, "gateway_id").map(GatewayIdentifiers::new)
}

/// Decode organization identifiers.
pub fn decode_organization(uid: &str) -> Result<OrganizationIdentifiers, CodecError> {
    decode_segment(uid, "organization_id").map(OrganizationIdentifiers::new)
}

/// Decode user identifiers.
pub fn decode_user(uid: &str) -> Result<UserIdentifiers, CodecError> {
    decode_segment(uid, "user_id").map(UserIdentifiers::new)
}

/// Decode end device identifiers from `application-id.device-id@tenant-id`.
///
/// # Errors
///
/// - [`CodecError::MissingTenant`] if there is no tenant part
/// - [`CodecError::Format`] if the local part has no `.`
/// - [`CodecError::InvalidArgument`] if either segment fails validation
pub fn decode_device(uid: &str) -> Result<EndDeviceIdentifiers, CodecError> {
    let (_, local) = decode(uid)?;
    let Some((application_id, device_id)) = local.split_once(DEVICE_SEPARATOR) else {
        return Err(CodecError::Format {
            uid: uid.to_string(),
        });
    };
    validate_id(device_id).map_err(|e| CodecError::syntax(uid, "device_id", e))?;
    validate_id(application_id).map_err(|e| CodecError::syntax(uid, "application_id", e))?;
    Ok(EndDeviceIdentifiers::new(application_id, device_id))
}

/// Decode a unique ID as the given entity kind.
pub fn decode_entity(kind: EntityKind, uid: &str) -> Result<EntityIdentifiers, CodecError> {
    Ok(match kind {
        EntityKind::Application => decode_application(uid)?.into(),
        EntityKind::Client => decode_client(uid)?.into(),
        EntityKind::Device => decode_device(uid)?.into(),
        EntityKind::Gateway => decode_gateway(uid)?.into(),
        EntityKind::Organization => decode_organization(uid)?.into(),
        EntityKind::User => decode_user(uid)?.into(),
    })
}

/// Derive a child of `parent` carrying the tenant of `uid`.
pub fn derive_context(parent: &TenantContext, uid: &str) -> Result<TenantContext, CodecError> {
    let tenant = decode_tenant(uid)?;
    debug!(uid = %uid, tenant_id = %tenant.tenant_id, "Derived tenant context");
    Ok(parent.with_tenant(tenant))
}

// =============================================================================
// UNIQUE ID VALUE
// =============================================================================

/// A unique ID known to have a tenant part.
///
/// Only the `@` shape is enforced; the local part is validated when it is
/// decoded into a concrete identifier type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueId {
    raw: String,
    separator: usize,
}

impl UniqueId {
    /// Encode `ids` under the tenant of `ctx`. See [`encode`].
    #[track_caller]
    pub fn encode<I: Identifiers>(ctx: &TenantContext, ids: I) -> Result<Self, CodecError> {
        encode(ctx, ids)?.parse()
    }

    /// The tenant part.
    #[must_use]
    pub fn tenant(&self) -> &str {
        &self.raw[self.separator + 1..]
    }

    /// The local part.
    #[must_use]
    pub fn local(&self) -> &str {
        &self.raw[..self.separator]
    }

    /// The full `local@tenant` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for UniqueId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tenant, _) = decode(s)?;
        let separator = s.len() - tenant.len() - TENANT_SEPARATOR.len_utf8();
        Ok(Self {
            raw: s.to_string(),
            separator,
        })
    }
}

impl TryFrom<String> for UniqueId {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UniqueId> for String {
    fn from(uid: UniqueId) -> Self {
        uid.raw
    }
}

impl AsRef<str> for UniqueId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
