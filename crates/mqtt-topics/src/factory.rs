//! # Layout Factory
//!
//! Picks a layout once, at construction, from the licensing signal.

use crate::layout::TopicLayout;
use crate::v2::V2Layout;
use crate::v3::V3Layout;
use serde::{Deserialize, Serialize};
use shared_ids::MultiTenancySignal;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Protocol generation of a topic layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVersion {
    /// Current generation.
    #[default]
    V3,
    /// Legacy generation.
    V2,
}

impl fmt::Display for LayoutVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3 => f.write_str("v3"),
            Self::V2 => f.write_str("v2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout version `{0}`, expected `v3` or `v2`")]
pub struct UnknownLayoutVersion(pub String);

impl FromStr for LayoutVersion {
    type Err = UnknownLayoutVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v3" => Ok(Self::V3),
            "v2" => Ok(Self::V2),
            _ => Err(UnknownLayoutVersion(s.to_string())),
        }
    }
}

/// The current layout, multi-tenant iff the license requires it.
pub fn select_layout(signal: &dyn MultiTenancySignal) -> Arc<dyn TopicLayout> {
    let multi_tenancy = signal.require_multi_tenancy();
    debug!(version = "v3", multi_tenancy, "Selected topic layout");
    Arc::new(V3Layout::new(multi_tenancy))
}

/// The legacy layout, multi-tenant iff the license requires it.
pub fn select_legacy_layout(signal: &dyn MultiTenancySignal) -> Arc<dyn TopicLayout> {
    let multi_tenancy = signal.require_multi_tenancy();
    debug!(version = "v2", multi_tenancy, "Selected topic layout");
    Arc::new(V2Layout::new(multi_tenancy))
}

/// Select by configured version.
pub fn new_layout(version: LayoutVersion, signal: &dyn MultiTenancySignal) -> Arc<dyn TopicLayout> {
    match version {
        LayoutVersion::V3 => select_layout(signal),
        LayoutVersion::V2 => select_legacy_layout(signal),
    }
}
