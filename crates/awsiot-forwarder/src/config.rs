//! Forwarder configuration from environment variables.

use crate::error::ConfigError;
use crate::DEFAULT_CHANNEL_CAPACITY;
use serde::{Deserialize, Serialize};
use std::env;

/// Default first segment of forwarded topics.
pub const DEFAULT_TOPIC_PREFIX: &str = "lorawan";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwarderConfig {
    /// First segment of every forwarded topic
    pub topic_prefix: String,

    /// Transport region, passed through to the publisher
    pub region: Option<String>,

    /// Inbound message buffer size
    pub channel_capacity: usize,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            topic_prefix: DEFAULT_TOPIC_PREFIX.to_string(),
            region: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ForwarderConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AWSIOT_TOPIC_PREFIX`: Topic prefix (default: lorawan)
    /// - `AWSIOT_REGION`: Region (default: none)
    /// - `AWSIOT_CHANNEL_CAPACITY`: Inbound buffer size (default: 1000)
    pub fn from_env() -> Self {
        Self {
            topic_prefix: env::var("AWSIOT_TOPIC_PREFIX")
                .unwrap_or_else(|_| DEFAULT_TOPIC_PREFIX.to_string()),

            region: env::var("AWSIOT_REGION").ok().filter(|v| !v.is_empty()),

            channel_capacity: env::var("AWSIOT_CHANNEL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CHANNEL_CAPACITY),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.topic_prefix;
        if prefix.is_empty() || prefix.starts_with('/') || prefix.ends_with('/') {
            return Err(ConfigError::InvalidTopicPrefix(prefix.clone()));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
