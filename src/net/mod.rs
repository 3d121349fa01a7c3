//! Networking modules for the session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `oracle` adapts them to the gate's
//! `SessionOracle` seam, and `types` defines the wire schema.

pub mod api;
pub mod oracle;
pub mod types;
