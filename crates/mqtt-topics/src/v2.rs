//! # Legacy Layout (v2)
//!
//! ```text
//! connect         birth
//! disconnect      last will
//! {id}/up         uplink
//! {id}/status     status
//! {id}/down       downlink (publish only)
//! ```
//!
//! `{id}` is always the bare gateway ID. Legacy gateways have no tx ack topic.

use crate::factory::LayoutVersion;
use crate::layout::{bare_gateway_id, path, TopicLayout};
use crate::topic::TopicKind;

const CONNECT: &str = "connect";
const DISCONNECT: &str = "disconnect";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct V2Layout {
    multi_tenancy: bool,
}

impl V2Layout {
    #[must_use]
    pub const fn new(multi_tenancy: bool) -> Self {
        Self { multi_tenancy }
    }
}

impl TopicLayout for V2Layout {
    fn version(&self) -> LayoutVersion {
        LayoutVersion::V2
    }

    fn multi_tenancy(&self) -> bool {
        self.multi_tenancy
    }

    fn build_topic(&self, kind: TopicKind, uid: &str) -> Vec<String> {
        match kind {
            TopicKind::Birth => vec![CONNECT.to_string()],
            TopicKind::LastWill => vec![DISCONNECT.to_string()],
            TopicKind::Uplink => path(&[], bare_gateway_id(uid), &["up"]),
            TopicKind::Status => path(&[], bare_gateway_id(uid), &["status"]),
            TopicKind::Downlink => path(&[], bare_gateway_id(uid), &["down"]),
            TopicKind::TxAck => Vec::new(),
        }
    }

    fn is_topic(&self, kind: TopicKind, path: &[String]) -> bool {
        match kind {
            TopicKind::Birth => path.len() == 1 && path[0] == CONNECT,
            TopicKind::LastWill => path.len() == 1 && path[0] == DISCONNECT,
            TopicKind::Uplink => path.len() == 2 && path[1] == "up",
            TopicKind::Status => path.len() == 2 && path[1] == "status",
            TopicKind::TxAck | TopicKind::Downlink => false,
        }
    }
}
