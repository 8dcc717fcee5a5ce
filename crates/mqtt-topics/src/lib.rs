//! # MQTT Topics - Gateway Topic Layouts
//!
//! Maps gateway unique IDs onto MQTT topic paths for two protocol
//! generations and classifies inbound paths back into topic kinds.
//!
//! ## Layouts
//!
//! | Kind      | v3                   | v2 (legacy)    |
//! |-----------|----------------------|----------------|
//! | birth     | -                    | `connect`      |
//! | last will | -                    | `disconnect`   |
//! | uplink    | `v3/{id}/up`         | `{id}/up`      |
//! | status    | `v3/{id}/status`     | `{id}/status`  |
//! | tx ack    | `v3/{id}/down/ack`   | -              |
//! | downlink  | `v3/{id}/down`       | `{id}/down`    |
//!
//! Downlink topics are built for publishing only and are never recognized.
//! A layout is chosen once through the [`factory`] and shared as
//! `Arc<dyn TopicLayout>`.

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod factory;
pub mod layout;
pub mod topic;
pub mod v2;
pub mod v3;

pub use factory::{new_layout, select_layout, select_legacy_layout, LayoutVersion, UnknownLayoutVersion};
pub use layout::TopicLayout;
pub use topic::{join, split, TopicKind, UnknownTopicKind, TOPIC_SEPARATOR};
pub use v2::V2Layout;
pub use v3::{V3Layout, TOPIC_V3};
