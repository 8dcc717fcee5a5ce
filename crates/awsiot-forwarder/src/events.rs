//! # Application Uplink Events
//!
//! Messages flowing from the application layer to the forwarder.

use serde::{Deserialize, Serialize};
use shared_ids::{EndDeviceIdentifiers, TenantContext};
use uuid::Uuid;

/// An application uplink event for one end device.
///
/// The tenant context travels with the message but is not part of its
/// serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationUp {
    #[serde(skip)]
    pub context: TenantContext,

    pub end_device_ids: EndDeviceIdentifiers,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correlation_ids: Vec<String>,

    pub up: UpPayload,
}

impl ApplicationUp {
    /// New event with a fresh correlation ID.
    pub fn new(context: TenantContext, end_device_ids: EndDeviceIdentifiers, up: UpPayload) -> Self {
        Self {
            context,
            end_device_ids,
            correlation_ids: vec![format!("as:up:{}", Uuid::new_v4())],
            up,
        }
    }
}

/// A downlink message as reported back in uplink events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDownlink {
    pub f_port: u32,
    pub f_cnt: u32,
    #[serde(default)]
    pub frm_payload: Vec<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correlation_ids: Vec<String>,
}

/// Payload of an [`ApplicationUp`] event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpPayload {
    UplinkMessage {
        f_port: u32,
        f_cnt: u32,
        #[serde(default)]
        frm_payload: Vec<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        decoded_payload: Option<serde_json::Value>,
    },
    JoinAccept {
        session_key_id: String,
    },
    DownlinkAck(ApplicationDownlink),
    DownlinkNack(ApplicationDownlink),
    DownlinkSent(ApplicationDownlink),
    DownlinkFailed {
        downlink: ApplicationDownlink,
        error: String,
    },
    DownlinkQueued(ApplicationDownlink),
    LocationSolved {
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        altitude: i32,
        source: String,
    },
    ServiceData {
        service: String,
        data: serde_json::Value,
    },
    DownlinkQueueInvalidated {
        downlinks: Vec<ApplicationDownlink>,
        last_f_cnt_down: u32,
    },
}

impl UpPayload {
    /// Topic suffix for this payload kind, or `None` if the kind is not
    /// forwarded.
    #[must_use]
    pub fn topic_suffix(&self) -> Option<&'static str> {
        match self {
            Self::UplinkMessage { .. } => Some("up"),
            Self::JoinAccept { .. } => Some("join"),
            Self::DownlinkAck(_) => Some("down/ack"),
            Self::DownlinkNack(_) => Some("down/nack"),
            Self::DownlinkSent(_) => Some("down/sent"),
            Self::DownlinkFailed { .. } => Some("down/failed"),
            Self::DownlinkQueued(_) => Some("down/queued"),
            Self::LocationSolved { .. } => Some("location"),
            Self::ServiceData { .. } | Self::DownlinkQueueInvalidated { .. } => None,
        }
    }

    /// Short name of the payload kind, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UplinkMessage { .. } => "uplink_message",
            Self::JoinAccept { .. } => "join_accept",
            Self::DownlinkAck(_) => "downlink_ack",
            Self::DownlinkNack(_) => "downlink_nack",
            Self::DownlinkSent(_) => "downlink_sent",
            Self::DownlinkFailed { .. } => "downlink_failed",
            Self::DownlinkQueued(_) => "downlink_queued",
            Self::LocationSolved { .. } => "location_solved",
            Self::ServiceData { .. } => "service_data",
            Self::DownlinkQueueInvalidated { .. } => "downlink_queue_invalidated",
        }
    }
}
