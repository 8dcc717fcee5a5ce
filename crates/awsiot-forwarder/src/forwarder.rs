//! # Forwarding Loop
//!
//! Drains a [`Subscription`] and republishes every forwardable message as
//! JSON on its tenant-scoped topic.
//!
//! ## Per-message flow
//!
//! ```text
//! ApplicationUp ─► device uid ─► topic suffix ─► JSON ─► Publisher
//!                     │              │            │         │
//!                   fail           skip         fail      fail
//! ```
//!
//! A failure is logged and counted; the loop moves on to the next message.
//! There are no retries and at most one publish is in flight.

use crate::config::ForwarderConfig;
use crate::error::ForwarderError;
use crate::events::ApplicationUp;
use crate::publisher::Publisher;
use crate::subscription::Subscription;
use crate::topic::forward_topic;
use shared_ids::{encode, Identifiers};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn, Instrument};

/// What happened to one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// Published on `topic`.
    Published { topic: String },
    /// The payload kind is not forwarded.
    Skipped { kind: &'static str },
}

/// Counters returned when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardStats {
    pub forwarded: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl ForwardStats {
    fn record(&mut self, result: &Result<ForwardOutcome, ForwarderError>) {
        match result {
            Ok(ForwardOutcome::Published { .. }) => self.forwarded += 1,
            Ok(ForwardOutcome::Skipped { .. }) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// Republishes application uplinks through a [`Publisher`].
pub struct Forwarder {
    config: ForwarderConfig,
    publisher: Arc<dyn Publisher>,
}

impl Forwarder {
    pub fn new(config: ForwarderConfig, publisher: Arc<dyn Publisher>) -> Self {
        Self { config, publisher }
    }

    #[must_use]
    pub fn config(&self) -> &ForwarderConfig {
        &self.config
    }

    /// Forward one message.
    pub async fn forward(&self, msg: &ApplicationUp) -> Result<ForwardOutcome, ForwarderError> {
        if msg.end_device_ids.is_zero() {
            return Err(ForwarderError::MissingDeviceIds);
        }
        let device_uid = encode(&msg.context, &msg.end_device_ids)?;
        // The encode above guarantees a tenant.
        let tenant_id = msg.context.tenant_id().unwrap_or_default();

        let Some(suffix) = msg.up.topic_suffix() else {
            debug!(device_uid = %device_uid, kind = msg.up.kind(), "Skipping message kind");
            return Ok(ForwardOutcome::Skipped { kind: msg.up.kind() });
        };

        let payload = serde_json::to_vec(msg)?;
        let topic = forward_topic(&self.config.topic_prefix, tenant_id, &msg.end_device_ids, suffix);

        self.publisher.publish(&topic, payload).await?;
        debug!(device_uid = %device_uid, topic = %topic, "Published message");
        Ok(ForwardOutcome::Published { topic })
    }

    /// Run until `shutdown` fires (or its sender is dropped) or the
    /// subscription closes.
    pub async fn run(&self, mut subscription: Subscription, mut shutdown: oneshot::Receiver<()>) -> ForwardStats {
        let mut stats = ForwardStats::default();
        info!(subscription = %subscription.name(), prefix = %self.config.topic_prefix, "Forwarder started");

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
                msg = subscription.recv() => {
                    let Some(msg) = msg else {
                        info!("Subscription closed");
                        break;
                    };
                    let span = msg.context.span().clone();
                    let result = self.forward(&msg).instrument(span).await;
                    if let Err(e) = &result {
                        warn!(
                            application_id = %msg.end_device_ids.application_id(),
                            device_id = %msg.end_device_ids.device_id,
                            error = %e,
                            "Failed to forward message"
                        );
                    }
                    stats.record(&result);
                }
            }
        }

        info!(
            forwarded = stats.forwarded,
            skipped = stats.skipped,
            failed = stats.failed,
            "Forwarder stopped"
        );
        stats
    }
}

/// Handle to a forwarder running on its own task.
pub struct ForwarderHandle {
    sender: mpsc::Sender<ApplicationUp>,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<ForwardStats>,
}

impl ForwarderHandle {
    /// Sender for inbound messages. Clone it to feed from several producers.
    #[must_use]
    pub fn sender(&self) -> &mpsc::Sender<ApplicationUp> {
        &self.sender
    }

    /// Signal the loop to stop and wait for its counters.
    ///
    /// Messages still queued when the signal is seen are not forwarded.
    pub async fn shutdown(mut self) -> Result<ForwardStats, ForwarderError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.task.await.map_err(|e| ForwarderError::Join(e.to_string()))
    }

    /// Close the inbound side and wait for the queue to drain.
    pub async fn drain(self) -> Result<ForwardStats, ForwarderError> {
        let Self {
            sender,
            shutdown,
            task,
        } = self;
        drop(sender);
        let stats = task.await.map_err(|e| ForwarderError::Join(e.to_string()));
        drop(shutdown);
        stats
    }
}

/// Spawn a forwarder on the current runtime.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn spawn_forwarder(config: ForwarderConfig, publisher: Arc<dyn Publisher>) -> ForwarderHandle {
    let (sender, subscription) = Subscription::new("awsiot", config.channel_capacity);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let forwarder = Forwarder::new(config, publisher);
    let task = tokio::spawn(async move { forwarder.run(subscription, shutdown_rx).await });
    ForwarderHandle {
        sender,
        shutdown: Some(shutdown_tx),
        task,
    }
}
