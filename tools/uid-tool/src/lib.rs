//! uid-tool: unique ID and gateway topic inspection
//!
//! ```text
//! uid-tool encode --tenant foo-tenant device foo-app foo-device
//! foo-app.foo-device@foo-tenant
//!
//! uid-tool decode device foo-app.foo-device@foo-tenant
//! { "tenant_id": "foo-tenant", "ids": { "device": { ... } } }
//!
//! uid-tool topic --multi-tenant uplink foo-gtw@foo-tenant
//! v3/foo-gtw@foo-tenant/up
//!
//! uid-tool classify --legacy foo-gtw/status
//! status
//! ```

use clap::{Parser, Subcommand};
use mqtt_topics::{join, new_layout, split, LayoutVersion, TopicKind};
use serde::Serialize;
use shared_ids::{
    decode_entity, decode_gateway, decode_tenant, encode, ApplicationIdentifiers,
    ClientIdentifiers, CodecError, EndDeviceIdentifiers, EntityIdentifiers, EntityKind,
    GatewayIdentifiers, Identifiers, OrganizationIdentifiers, StaticLicense, TenantContext,
    UserIdentifiers,
};
use thiserror::Error;
use tracing::debug;

/// Exit code for input rejected by the codec.
pub const EXIT_REJECTED: u8 = 2;

/// Exit code for malformed command lines that clap cannot catch.
pub const EXIT_USAGE: u8 = 64;

/// Inspect unique IDs and gateway topics
#[derive(Parser, Debug)]
#[command(name = "uid-tool")]
#[command(about = "Encode, decode and map tenant-scoped unique IDs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode identifiers into a unique ID
    Encode {
        /// Tenant ID
        #[arg(short, long)]
        tenant: String,

        /// Entity kind (application, client, device, gateway, organization, user)
        kind: EntityKind,

        /// Identifier segments; devices take the application ID and device ID
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Decode a unique ID and print it as JSON
    Decode {
        /// Entity kind (application, client, device, gateway, organization, user)
        kind: EntityKind,

        /// Unique ID
        uid: String,
    },

    /// Build a gateway topic
    Topic {
        /// Use the legacy (v2) layout
        #[arg(long)]
        legacy: bool,

        /// Keep the tenant suffix in topics
        #[arg(long)]
        multi_tenant: bool,

        /// Topic kind (birth, last-will, uplink, status, tx-ack, downlink)
        kind: TopicKind,

        /// Gateway unique ID
        uid: String,
    },

    /// Classify a `/`-separated gateway topic
    Classify {
        /// Use the legacy (v2) layout
        #[arg(long)]
        legacy: bool,

        /// Topic
        topic: String,
    },
}

/// Errors surfaced to the user.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("rejected input: {0}")]
    Rejected(#[from] CodecError),

    #[error("{kind} takes {expected} identifier(s), got {got}")]
    Arity {
        kind: EntityKind,
        expected: usize,
        got: usize,
    },

    #[error("{kind} identifiers are empty")]
    EmptyIdentifiers { kind: EntityKind },

    #[error("{version} layout has no {kind} topic")]
    UnsupportedTopic {
        version: LayoutVersion,
        kind: TopicKind,
    },

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl ToolError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Rejected(_) => EXIT_REJECTED,
            Self::Output(_) => 1,
            _ => EXIT_USAGE,
        }
    }
}

#[derive(Debug, Serialize)]
struct Decoded {
    tenant_id: String,
    ids: EntityIdentifiers,
}

/// Build typed identifiers from raw command line segments.
pub fn entity_ids(kind: EntityKind, segments: &[String]) -> Result<EntityIdentifiers, ToolError> {
    let expected = if kind == EntityKind::Device { 2 } else { 1 };
    if segments.len() != expected {
        return Err(ToolError::Arity {
            kind,
            expected,
            got: segments.len(),
        });
    }
    let first = segments[0].clone();
    let ids: EntityIdentifiers = match kind {
        EntityKind::Application => ApplicationIdentifiers::new(first).into(),
        EntityKind::Client => ClientIdentifiers::new(first).into(),
        EntityKind::Device => EndDeviceIdentifiers::new(first, segments[1].clone()).into(),
        EntityKind::Gateway => GatewayIdentifiers::new(first).into(),
        EntityKind::Organization => OrganizationIdentifiers::new(first).into(),
        EntityKind::User => UserIdentifiers::new(first).into(),
    };
    // Encoding zero identifiers is a programming error; catch it as bad usage.
    if ids.is_zero() {
        return Err(ToolError::EmptyIdentifiers { kind });
    }
    Ok(ids)
}

fn version(legacy: bool) -> LayoutVersion {
    if legacy {
        LayoutVersion::V2
    } else {
        LayoutVersion::V3
    }
}

/// Execute a parsed command and return what should be printed.
pub fn run(cli: &Cli) -> Result<String, ToolError> {
    match &cli.command {
        Command::Encode { tenant, kind, ids } => {
            let ids = entity_ids(*kind, ids)?;
            let ctx = TenantContext::background().with_tenant_id(tenant.as_str());
            let uid = encode(&ctx, &ids)?;
            debug!(kind = %kind, uid = %uid, "Encoded unique ID");
            Ok(uid)
        }

        Command::Decode { kind, uid } => {
            let ids = decode_entity(*kind, uid)?;
            let tenant = decode_tenant(uid)?;
            let decoded = Decoded {
                tenant_id: tenant.tenant_id,
                ids,
            };
            Ok(serde_json::to_string_pretty(&decoded)?)
        }

        Command::Topic {
            legacy,
            multi_tenant,
            kind,
            uid,
        } => {
            decode_gateway(uid)?;
            let version = version(*legacy);
            let layout = new_layout(
                version,
                &StaticLicense {
                    multi_tenancy: *multi_tenant,
                },
            );
            let path = layout.build_topic(*kind, uid);
            if path.is_empty() {
                return Err(ToolError::UnsupportedTopic {
                    version,
                    kind: *kind,
                });
            }
            Ok(join(&path))
        }

        Command::Classify { legacy, topic } => {
            // Classification does not depend on multi-tenancy.
            let layout = new_layout(version(*legacy), &StaticLicense::default());
            Ok(layout
                .classify(&split(topic))
                .map_or_else(|| "none".to_string(), |kind| kind.to_string()))
        }
    }
}
