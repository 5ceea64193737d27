//! Outbound delivery of events to systems outside the service.

pub mod forwarder;
pub mod webhook;
