//! # AWS IoT Forwarder
//!
//! Republishes application uplink events on tenant-scoped topics:
//!
//! ```text
//! lorawan/{tenant}/{application}/things/{device}/up
//! lorawan/{tenant}/{application}/things/{device}/join
//! lorawan/{tenant}/{application}/things/{device}/down/{ack,nack,sent,failed,queued}
//! lorawan/{tenant}/{application}/things/{device}/location
//! ```
//!
//! Other event kinds are skipped. The transport sits behind [`Publisher`];
//! only the in-memory implementation ships with this crate.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod error;
pub mod events;
pub mod forwarder;
pub mod publisher;
pub mod subscription;
pub mod topic;

pub use config::{ForwarderConfig, DEFAULT_TOPIC_PREFIX};
pub use error::{ConfigError, ForwarderError, PublishError};
pub use events::{ApplicationDownlink, ApplicationUp, UpPayload};
pub use forwarder::{spawn_forwarder, ForwardOutcome, ForwardStats, Forwarder, ForwarderHandle};
pub use publisher::{InMemoryPublisher, PublishedMessage, Publisher};
pub use subscription::{Subscription, SubscriptionError};
pub use topic::forward_topic;

/// Maximum inbound messages to buffer before senders wait.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
