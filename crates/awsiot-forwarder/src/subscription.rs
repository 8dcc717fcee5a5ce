//! # Subscription
//!
//! Inbound side of the forwarder: a named, bounded queue of
//! [`ApplicationUp`] events.

use crate::events::ApplicationUp;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// All senders were dropped.
    #[error("Subscription closed")]
    Closed,
}

/// Receiving end of an application uplink queue.
#[derive(Debug)]
pub struct Subscription {
    name: String,
    receiver: mpsc::Receiver<ApplicationUp>,
}

impl Subscription {
    /// Create a subscription and the sender that feeds it.
    pub fn new(name: impl Into<String>, capacity: usize) -> (mpsc::Sender<ApplicationUp>, Self) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let name = name.into();
        debug!(subscription = %name, capacity, "Subscription created");
        (sender, Self { name, receiver })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Next message, or `None` once every sender is gone and the queue is
    /// drained.
    pub async fn recv(&mut self) -> Option<ApplicationUp> {
        self.receiver.recv().await
    }

    /// Next message without waiting.
    ///
    /// - `Ok(Some(msg))` - a message was queued
    /// - `Ok(None)` - the queue is empty
    /// - `Err(SubscriptionError::Closed)` - all senders were dropped
    pub fn try_recv(&mut self) -> Result<Option<ApplicationUp>, SubscriptionError> {
        match self.receiver.try_recv() {
            Ok(msg) => Ok(Some(msg)),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => Err(SubscriptionError::Closed),
        }
    }

    /// Consume the subscription as a stream.
    #[must_use]
    pub fn into_stream(self) -> ReceiverStream<ApplicationUp> {
        ReceiverStream::new(self.receiver)
    }
}
