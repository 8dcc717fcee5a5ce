//! # Topic Kinds
//!
//! The six kinds of gateway topic and the `/`-separated wire form of a path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between topic segments on the wire.
pub const TOPIC_SEPARATOR: &str = "/";

/// Kinds of gateway topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicKind {
    /// Published by the gateway when it connects.
    Birth,
    /// Published by the broker when the gateway disconnects.
    LastWill,
    /// Uplink messages from the gateway.
    Uplink,
    /// Gateway status messages.
    Status,
    /// Acknowledgements of downlink transmissions.
    TxAck,
    /// Downlink messages to the gateway.
    Downlink,
}

impl TopicKind {
    /// All kinds, in declaration order.
    pub const ALL: [TopicKind; 6] = [
        TopicKind::Birth,
        TopicKind::LastWill,
        TopicKind::Uplink,
        TopicKind::Status,
        TopicKind::TxAck,
        TopicKind::Downlink,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Birth => "birth",
            Self::LastWill => "last-will",
            Self::Uplink => "uplink",
            Self::Status => "status",
            Self::TxAck => "tx-ack",
            Self::Downlink => "downlink",
        }
    }
}

impl fmt::Display for TopicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TopicKind {
    type Err = UnknownTopicKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTopicKind(s.to_string()))
    }
}

/// Returned when parsing an unknown topic kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic kind `{0}`")]
pub struct UnknownTopicKind(pub String);

/// Join topic segments into the wire form.
#[must_use]
pub fn join(path: &[String]) -> String {
    path.join(TOPIC_SEPARATOR)
}

/// Split a wire topic into segments.
#[must_use]
pub fn split(topic: &str) -> Vec<String> {
    if topic.is_empty() {
        return Vec::new();
    }
    topic.split(TOPIC_SEPARATOR).map(str::to_string).collect()
}
