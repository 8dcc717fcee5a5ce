//! Cross-crate integration flows.

pub mod addressing;
pub mod forwarding;
pub mod gateway_topics;
