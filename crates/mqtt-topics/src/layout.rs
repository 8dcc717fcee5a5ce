//! # Topic Layout
//!
//! A layout turns a gateway unique ID into topic paths and classifies inbound
//! paths. Unsupported kinds build an empty path and are never recognized.

use crate::factory::LayoutVersion;
use crate::topic::TopicKind;
use shared_ids::{decode_gateway, TENANT_SEPARATOR};
use std::fmt;
use tracing::debug;

/// A gateway topic layout.
///
/// Implementations are immutable and shared across connections.
pub trait TopicLayout: Send + Sync + fmt::Debug {
    /// Protocol generation this layout speaks.
    fn version(&self) -> LayoutVersion;

    /// Whether gateway IDs keep their tenant suffix in topics.
    fn multi_tenancy(&self) -> bool;

    /// Build the topic path of `kind` for the gateway `uid`.
    ///
    /// Returns an empty path when the layout does not support `kind`.
    fn build_topic(&self, kind: TopicKind, uid: &str) -> Vec<String>;

    /// Whether `path` is a topic of `kind` in this layout.
    fn is_topic(&self, kind: TopicKind, path: &[String]) -> bool;

    /// The first kind that recognizes `path`.
    fn classify(&self, path: &[String]) -> Option<TopicKind> {
        TopicKind::ALL
            .into_iter()
            .find(|kind| self.is_topic(*kind, path))
    }

    // ===== CONVENIENCE =====

    fn birth_topic(&self, uid: &str) -> Vec<String> {
        self.build_topic(TopicKind::Birth, uid)
    }

    fn is_birth_topic(&self, path: &[String]) -> bool {
        self.is_topic(TopicKind::Birth, path)
    }

    fn last_will_topic(&self, uid: &str) -> Vec<String> {
        self.build_topic(TopicKind::LastWill, uid)
    }

    fn is_last_will_topic(&self, path: &[String]) -> bool {
        self.is_topic(TopicKind::LastWill, path)
    }

    fn uplink_topic(&self, uid: &str) -> Vec<String> {
        self.build_topic(TopicKind::Uplink, uid)
    }

    fn is_uplink_topic(&self, path: &[String]) -> bool {
        self.is_topic(TopicKind::Uplink, path)
    }

    fn status_topic(&self, uid: &str) -> Vec<String> {
        self.build_topic(TopicKind::Status, uid)
    }

    fn is_status_topic(&self, path: &[String]) -> bool {
        self.is_topic(TopicKind::Status, path)
    }

    fn tx_ack_topic(&self, uid: &str) -> Vec<String> {
        self.build_topic(TopicKind::TxAck, uid)
    }

    fn is_tx_ack_topic(&self, path: &[String]) -> bool {
        self.is_topic(TopicKind::TxAck, path)
    }

    fn downlink_topic(&self, uid: &str) -> Vec<String> {
        self.build_topic(TopicKind::Downlink, uid)
    }
}

/// The gateway ID of `uid` without its tenant suffix.
///
/// Callers validate the uid before it reaches a layout. If it does not
/// decode anyway, the text before the first `@` is used, or the whole input
/// if there is none, so the segment is never empty for non-empty input.
pub(crate) fn bare_gateway_id(uid: &str) -> String {
    match decode_gateway(uid) {
        Ok(ids) => ids.gateway_id,
        Err(e) => {
            debug!(uid = %uid, error = %e, "Gateway unique ID did not decode");
            match uid.split_once(TENANT_SEPARATOR) {
                Some((local, _)) if !local.is_empty() => local.to_string(),
                _ => uid.to_string(),
            }
        }
    }
}

/// Owned path from static segments and one identifier segment.
pub(crate) fn path(prefix: &[&str], id: String, suffix: &[&str]) -> Vec<String> {
    prefix
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(id))
        .chain(suffix.iter().map(|s| s.to_string()))
        .collect()
}
