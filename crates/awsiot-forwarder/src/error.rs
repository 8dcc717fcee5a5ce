//! # Error Types

use shared_ids::CodecError;
use thiserror::Error;

/// Errors from a [`crate::Publisher`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// Nobody is listening on the topic.
    #[error("No subscribers for topic {topic}")]
    NoSubscribers { topic: String },

    /// The transport rejected or failed the publish.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors forwarding a single message.
#[derive(Debug, Error)]
pub enum ForwarderError {
    /// The message has no end device identifiers.
    #[error("Message has no end device identifiers")]
    MissingDeviceIds,

    /// The device unique ID could not be built.
    #[error("Device unique ID: {0}")]
    Codec(#[from] CodecError),

    /// The message could not be serialized.
    #[error("Failed to marshal message: {0}")]
    Marshal(#[from] serde_json::Error),

    /// The publisher failed.
    #[error("Failed to publish message: {0}")]
    Publish(#[from] PublishError),

    /// The forwarding task panicked or was cancelled.
    #[error("Forwarder task failed: {0}")]
    Join(String),
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The topic prefix is empty or has a leading or trailing `/`.
    #[error("Invalid topic prefix `{0}`")]
    InvalidTopicPrefix(String),

    /// Channel capacity must be positive.
    #[error("Channel capacity must be greater than zero")]
    ZeroCapacity,
}
