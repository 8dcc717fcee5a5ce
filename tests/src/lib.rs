//! # Tenant Addressing Test Suite
//!
//! Cross-crate flows that no single crate can test on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── addressing.rs       # resolver -> tenant context -> codec
//!     ├── gateway_topics.rs   # codec -> layout factory -> topic layouts
//!     └── forwarding.rs       # codec -> forwarder -> publisher
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tenancy-tests
//! cargo test -p tenancy-tests integration::forwarding
//! ```

pub mod integration;
