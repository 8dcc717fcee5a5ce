//! # Current Layout (v3)
//!
//! ```text
//! v3/{id}/up          uplink
//! v3/{id}/status      status
//! v3/{id}/down/ack    tx ack
//! v3/{id}/down        downlink (publish only)
//! ```
//!
//! `{id}` is the full gateway unique ID in multi-tenant deployments and the
//! bare gateway ID otherwise. There are no birth or last will topics.

use crate::factory::LayoutVersion;
use crate::layout::{bare_gateway_id, path, TopicLayout};
use crate::topic::TopicKind;

/// First segment of every v3 topic.
pub const TOPIC_V3: &str = "v3";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct V3Layout {
    multi_tenancy: bool,
}

impl V3Layout {
    #[must_use]
    pub const fn new(multi_tenancy: bool) -> Self {
        Self { multi_tenancy }
    }

    fn id(&self, uid: &str) -> String {
        if self.multi_tenancy {
            uid.to_string()
        } else {
            bare_gateway_id(uid)
        }
    }
}

impl TopicLayout for V3Layout {
    fn version(&self) -> LayoutVersion {
        LayoutVersion::V3
    }

    fn multi_tenancy(&self) -> bool {
        self.multi_tenancy
    }

    fn build_topic(&self, kind: TopicKind, uid: &str) -> Vec<String> {
        match kind {
            TopicKind::Birth | TopicKind::LastWill => Vec::new(),
            TopicKind::Uplink => path(&[TOPIC_V3], self.id(uid), &["up"]),
            TopicKind::Status => path(&[TOPIC_V3], self.id(uid), &["status"]),
            TopicKind::TxAck => path(&[TOPIC_V3], self.id(uid), &["down", "ack"]),
            TopicKind::Downlink => path(&[TOPIC_V3], self.id(uid), &["down"]),
        }
    }

    fn is_topic(&self, kind: TopicKind, path: &[String]) -> bool {
        match kind {
            TopicKind::Uplink => path.len() == 3 && path[2] == "up",
            TopicKind::Status => path.len() == 3 && path[2] == "status",
            TopicKind::TxAck => path.len() == 4 && path[2] == "down" && path[3] == "ack",
            TopicKind::Birth | TopicKind::LastWill | TopicKind::Downlink => false,
        }
    }
}
