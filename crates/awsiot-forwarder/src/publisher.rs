//! # Publisher
//!
//! The transport side of the forwarder.

use crate::error::PublishError;
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::debug;

/// Publishes a payload on a topic.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish `payload` on `topic`.
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), PublishError>;

    /// Total number of successful publishes.
    fn messages_published(&self) -> u64;
}

/// A message seen by an [`InMemoryPublisher`] subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

/// In-memory publisher.
///
/// Fans messages out to every receiver obtained from
/// [`InMemoryPublisher::subscribe`] over a `tokio::sync::broadcast` channel.
/// Publishing with no receivers fails with [`PublishError::NoSubscribers`].
pub struct InMemoryPublisher {
    sender: broadcast::Sender<PublishedMessage>,
    published: AtomicU64,
    capacity: usize,
}

impl InMemoryPublisher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// A zero capacity is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Receive every message published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PublishedMessage> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Publisher for InMemoryPublisher {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), PublishError> {
        let message = PublishedMessage {
            topic: topic.to_string(),
            payload,
        };
        match self.sender.send(message) {
            Ok(receivers) => {
                self.published.fetch_add(1, Ordering::Relaxed);
                debug!(topic = %topic, receivers, "Message published");
                Ok(())
            }
            Err(_) => Err(PublishError::NoSubscribers {
                topic: topic.to_string(),
            }),
        }
    }

    fn messages_published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}
