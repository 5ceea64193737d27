//! Deadline and inspection reminders.
//!
//! A sweep looks at every task due, and every permit inspection scheduled,
//! within the reminder horizon. Each item is classified into an urgency
//! tier; non-normal tiers are recorded in `reminder_log` and, when the
//! record is new for that subject, tier and UTC day, published on the bus.

use std::sync::Arc;
use std::time::Duration;

use ampsite_core::reminders::{self, Reminder, ReminderSubject, UPCOMING_DAYS};
use ampsite_core::types::Timestamp;
use ampsite_db::models::reminder::DatedSubject;
use ampsite_db::repositories::{PermitRepo, ReminderRepo, TaskRepo};
use ampsite_events::{EventBus, PlatformEvent};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// Outcome of one sweep.
#[derive(Debug, Default, Serialize)]
pub struct SweepReport {
    /// Tasks and permits inside the reminder horizon.
    pub evaluated: usize,
    /// Reminders published by this sweep.
    pub sent: usize,
    /// Reminders skipped because the same one already went out today.
    pub suppressed: usize,
    pub reminders: Vec<Reminder>,
}

/// Run one sweep at `now`.
pub async fn sweep(
    pool: &PgPool,
    bus: &EventBus,
    now: Timestamp,
) -> Result<SweepReport, sqlx::Error> {
    let horizon = now + chrono::Duration::days(UPCOMING_DAYS);
    let tasks = TaskRepo::list_due_before(pool, horizon).await?;
    let permits = PermitRepo::list_inspections_before(pool, horizon).await?;

    let mut report = SweepReport::default();
    for (subject, items) in [
        (ReminderSubject::Task, tasks),
        (ReminderSubject::Permit, permits),
    ] {
        for item in items {
            report.evaluated += 1;
            let Some(reminder) =
                reminders::plan_reminder(subject, item.id, item.project_id, item.due, now)
            else {
                continue;
            };

            if ReminderRepo::record_if_new(pool, &reminder).await?.is_none() {
                report.suppressed += 1;
                continue;
            }

            bus.publish(reminder_event(&reminder, &item));
            report.sent += 1;
            report.reminders.push(reminder);
        }
    }

    Ok(report)
}

fn reminder_event(reminder: &Reminder, item: &DatedSubject) -> PlatformEvent {
    PlatformEvent::new(reminder.subject.event_type())
        .with_source(reminder.subject.name(), reminder.subject_id)
        .with_payload(serde_json::json!({
            "project_id": reminder.project_id,
            "label": item.label,
            "tier": reminder.tier.name(),
            "days_until": reminder.days_until,
            "overdue": reminder.overdue,
            "due": item.due.timestamp_nanos_opt(),
        }))
}

/// Run the sweep every `interval` until `cancel` fires.
pub async fn run(
    pool: PgPool,
    bus: Arc<EventBus>,
    interval: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(interval_secs = interval.as_secs(), "Reminder sweep job started");

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Reminder sweep job stopping");
                break;
            }
            _ = ticker.tick() => {
                match sweep(&pool, &bus, Utc::now()).await {
                    Ok(report) if report.sent > 0 => {
                        tracing::info!(
                            evaluated = report.evaluated,
                            sent = report.sent,
                            suppressed = report.suppressed,
                            "Reminder sweep: reminders sent"
                        );
                    }
                    Ok(report) => {
                        tracing::debug!(
                            evaluated = report.evaluated,
                            "Reminder sweep: nothing to send"
                        );
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Reminder sweep failed");
                    }
                }
            }
        }
    }
}
