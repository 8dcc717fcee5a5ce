//! # Entity Identifiers
//!
//! Typed identifiers for the six addressable entity kinds and the tenant.
//!
//! Identifier structs are plain values: they are not validated on
//! construction. Validation happens at the codec boundary, when a unique ID
//! is decoded back into one of these types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ENTITY KIND
// =============================================================================

/// The six entity kinds that can be addressed by a unique ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Application,
    Client,
    Device,
    Gateway,
    Organization,
    User,
}

impl EntityKind {
    /// All kinds, in declaration order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Application,
        EntityKind::Client,
        EntityKind::Device,
        EntityKind::Gateway,
        EntityKind::Organization,
        EntityKind::User,
    ];

    /// Lowercase name used on the command line and in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Client => "client",
            Self::Device => "device",
            Self::Gateway => "gateway",
            Self::Organization => "organization",
            Self::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown entity kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entity kind `{0}`")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

// =============================================================================
// IDENTIFIERS TRAIT
// =============================================================================

/// Anything that can be turned into the local part of a unique ID.
///
/// Implemented for every identifier struct, for [`EntityIdentifiers`], for
/// references to those, and for `Option<T>` so that an absent identifier can
/// reach the codec and trip its precondition check.
pub trait Identifiers {
    /// The entity kind, or `None` when there is no identifier at all.
    fn entity_kind(&self) -> Option<EntityKind>;

    /// The local part of the unique ID (no tenant suffix).
    fn id_string(&self) -> String;

    /// `true` when no identifying field is set.
    fn is_zero(&self) -> bool;
}

impl<T: Identifiers + ?Sized> Identifiers for &T {
    fn entity_kind(&self) -> Option<EntityKind> {
        (**self).entity_kind()
    }

    fn id_string(&self) -> String {
        (**self).id_string()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: Identifiers> Identifiers for Option<T> {
    fn entity_kind(&self) -> Option<EntityKind> {
        self.as_ref().and_then(Identifiers::entity_kind)
    }

    fn id_string(&self) -> String {
        self.as_ref().map(Identifiers::id_string).unwrap_or_default()
    }

    fn is_zero(&self) -> bool {
        self.as_ref().map_or(true, Identifiers::is_zero)
    }
}

// =============================================================================
// SINGLE-SEGMENT IDENTIFIERS
// =============================================================================

macro_rules! single_segment_ids {
    ($(#[$meta:meta])* $name:ident, $field:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            pub $field: String,
        }

        impl $name {
            /// Wrap an identifier string. No validation is applied.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self { $field: id.into() }
            }
        }

        impl Identifiers for $name {
            fn entity_kind(&self) -> Option<EntityKind> {
                Some($kind)
            }

            fn id_string(&self) -> String {
                self.$field.clone()
            }

            fn is_zero(&self) -> bool {
                self.$field.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.$field)
            }
        }
    };
}

single_segment_ids!(
    /// Identifies an application.
    ApplicationIdentifiers,
    application_id,
    EntityKind::Application
);
single_segment_ids!(
    /// Identifies an OAuth client.
    ClientIdentifiers,
    client_id,
    EntityKind::Client
);
single_segment_ids!(
    /// Identifies a gateway.
    GatewayIdentifiers,
    gateway_id,
    EntityKind::Gateway
);
single_segment_ids!(
    /// Identifies an organization.
    OrganizationIdentifiers,
    organization_id,
    EntityKind::Organization
);
single_segment_ids!(
    /// Identifies a user.
    UserIdentifiers,
    user_id,
    EntityKind::User
);

// =============================================================================
// END DEVICE
// =============================================================================

/// Identifies an end device within an application.
///
/// The local part of its unique ID is `application-id.device-id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndDeviceIdentifiers {
    pub application_ids: ApplicationIdentifiers,
    pub device_id: String,
}

impl EndDeviceIdentifiers {
    /// Build device identifiers from an application ID and a device ID.
    #[must_use]
    pub fn new(application_id: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            application_ids: ApplicationIdentifiers::new(application_id),
            device_id: device_id.into(),
        }
    }

    /// The application this device belongs to.
    #[must_use]
    pub fn application_id(&self) -> &str {
        &self.application_ids.application_id
    }
}

impl Identifiers for EndDeviceIdentifiers {
    fn entity_kind(&self) -> Option<EntityKind> {
        Some(EntityKind::Device)
    }

    fn id_string(&self) -> String {
        format!("{}.{}", self.application_ids.application_id, self.device_id)
    }

    fn is_zero(&self) -> bool {
        self.application_ids.is_zero() && self.device_id.is_empty()
    }
}

impl fmt::Display for EndDeviceIdentifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.application_ids.application_id, self.device_id)
    }
}

// =============================================================================
// TENANT
// =============================================================================

/// Identifies a tenant. Carried in a [`crate::TenantContext`], never inside
/// the entity identifiers themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantIdentifiers {
    pub tenant_id: String,
}

impl TenantIdentifiers {
    /// Wrap a tenant ID string. No validation is applied.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            tenant_id: id.into(),
        }
    }

    /// `true` when the tenant ID is empty.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.tenant_id.is_empty()
    }
}

impl fmt::Display for TenantIdentifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tenant_id)
    }
}

// =============================================================================
// TAGGED UNION
// =============================================================================

/// Identifiers of any addressable entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityIdentifiers {
    Application(ApplicationIdentifiers),
    Client(ClientIdentifiers),
    Device(EndDeviceIdentifiers),
    Gateway(GatewayIdentifiers),
    Organization(OrganizationIdentifiers),
    User(UserIdentifiers),
}

impl EntityIdentifiers {
    /// The kind of entity these identifiers address.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Application(_) => EntityKind::Application,
            Self::Client(_) => EntityKind::Client,
            Self::Device(_) => EntityKind::Device,
            Self::Gateway(_) => EntityKind::Gateway,
            Self::Organization(_) => EntityKind::Organization,
            Self::User(_) => EntityKind::User,
        }
    }

    fn inner(&self) -> &dyn Identifiers {
        match self {
            Self::Application(ids) => ids,
            Self::Client(ids) => ids,
            Self::Device(ids) => ids,
            Self::Gateway(ids) => ids,
            Self::Organization(ids) => ids,
            Self::User(ids) => ids,
        }
    }
}

impl Identifiers for EntityIdentifiers {
    fn entity_kind(&self) -> Option<EntityKind> {
        Some(self.kind())
    }

    fn id_string(&self) -> String {
        self.inner().id_string()
    }

    fn is_zero(&self) -> bool {
        self.inner().is_zero()
    }
}

impl fmt::Display for EntityIdentifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id_string())
    }
}

impl From<ApplicationIdentifiers> for EntityIdentifiers {
    fn from(ids: ApplicationIdentifiers) -> Self {
        Self::Application(ids)
    }
}

impl From<ClientIdentifiers> for EntityIdentifiers {
    fn from(ids: ClientIdentifiers) -> Self {
        Self::Client(ids)
    }
}

impl From<EndDeviceIdentifiers> for EntityIdentifiers {
    fn from(ids: EndDeviceIdentifiers) -> Self {
        Self::Device(ids)
    }
}

impl From<GatewayIdentifiers> for EntityIdentifiers {
    fn from(ids: GatewayIdentifiers) -> Self {
        Self::Gateway(ids)
    }
}

impl From<OrganizationIdentifiers> for EntityIdentifiers {
    fn from(ids: OrganizationIdentifiers) -> Self {
        Self::Organization(ids)
    }
}

impl From<UserIdentifiers> for EntityIdentifiers {
    fn from(ids: UserIdentifiers) -> Self {
        Self::User(ids)
    }
}
