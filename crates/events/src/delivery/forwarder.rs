//! Forwards reminder and weather events from the bus to a webhook.

use tokio::sync::broadcast;

use crate::bus::PlatformEvent;
use crate::delivery::webhook::WebhookDelivery;

/// Event types pushed to the reminder webhook.
pub const FORWARDED_EVENT_TYPES: &[&str] =
    &["task.reminder", "permit.reminder", "task.weather_warning"];

/// Background service relaying notification events to an external URL.
pub struct ReminderForwarder {
    url: String,
    delivery: WebhookDelivery,
}

impl ReminderForwarder {
    pub fn new(url: impl Into<String>, delivery: WebhookDelivery) -> Self {
        Self {
            url: url.into(),
            delivery,
        }
    }

    pub fn forwards(event_type: &str) -> bool {
        FORWARDED_EVENT_TYPES.contains(&event_type)
    }

    /// Run until the bus closes. Delivery failures are logged and skipped.
    pub async fn run(self, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) if Self::forwards(&event.event_type) => {
                    if self.delivery.deliver(&self.url, &event).await.is_ok() {
                        tracing::debug!(
                            event_type = %event.event_type,
                            source_entity_id = ?event.source_entity_id,
                            "Forwarded notification"
                        );
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Reminder forwarder lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, reminder forwarder shutting down");
                    break;
                }
            }
        }
    }
}
