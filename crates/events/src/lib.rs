//! Event bus and outbound notification plumbing.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`PlatformEvent`]: the domain event envelope.
//! - [`EventPersistence`]: background service that writes every event to
//!   the `events` table.
//! - [`delivery`]: webhook delivery and the reminder forwarder.

pub mod bus;
pub mod delivery;
pub mod persistence;

pub use bus::{EventBus, PlatformEvent};
pub use delivery::forwarder::ReminderForwarder;
pub use delivery::webhook::{WebhookDelivery, WebhookError};
pub use persistence::EventPersistence;
