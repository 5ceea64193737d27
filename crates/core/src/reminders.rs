//! Escalating deadline reminders and weather warnings.
//!
//! A sweep evaluates every dated task and permit against "now", buckets the
//! remaining days into an [`UrgencyTier`], and emits a reminder for every
//! tier except [`UrgencyTier::Normal`]. A reminder is sent at most once per
//! (subject, tier, UTC day); the repository layer enforces that with a
//! unique key built from [`Reminder::sent_on`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;
use crate::fields::{require_text, MAX_SHORT_TEXT_LEN};
use crate::types::{DbId, Timestamp};

/// Fewer than this many days left: urgent.
pub const URGENT_DAYS: i64 = 3;
/// Fewer than this many days left: soon.
pub const SOON_DAYS: i64 = 7;
/// Fewer than this many days left: upcoming.
pub const UPCOMING_DAYS: i64 = 14;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Urgent,
    Soon,
    Upcoming,
    Normal,
}

impl UrgencyTier {
    pub fn for_days(days_until: i64) -> Self {
        if days_until < URGENT_DAYS {
            UrgencyTier::Urgent
        } else if days_until < SOON_DAYS {
            UrgencyTier::Soon
        } else if days_until < UPCOMING_DAYS {
            UrgencyTier::Upcoming
        } else {
            UrgencyTier::Normal
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::Soon => "soon",
            UrgencyTier::Upcoming => "upcoming",
            UrgencyTier::Normal => "normal",
        }
    }

    /// Whether this tier produces a notification.
    pub fn notifies(self) -> bool {
        self != UrgencyTier::Normal
    }
}

/// Whole days from `now` until `due`, rounded toward negative infinity.
///
/// Anything due later today is `0`; anything due earlier today or before is
/// negative (overdue).
pub fn days_until(due: Timestamp, now: Timestamp) -> i64 {
    (due - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// What a reminder is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderSubject {
    Task,
    Permit,
}

impl ReminderSubject {
    pub fn name(self) -> &'static str {
        match self {
            ReminderSubject::Task => "task",
            ReminderSubject::Permit => "permit",
        }
    }

    pub fn event_type(self) -> &'static str {
        match self {
            ReminderSubject::Task => "task.reminder",
            ReminderSubject::Permit => "permit.reminder",
        }
    }
}

/// A reminder the sweep wants to send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reminder {
    pub subject: ReminderSubject,
    pub subject_id: DbId,
    pub project_id: DbId,
    pub tier: UrgencyTier,
    pub days_until: i64,
    pub overdue: bool,
    /// UTC day the reminder belongs to; part of the de-duplication key.
    pub sent_on: NaiveDate,
}

/// Decide whether a dated subject needs a reminder right now.
pub fn plan_reminder(
    subject: ReminderSubject,
    subject_id: DbId,
    project_id: DbId,
    due: Timestamp,
    now: Timestamp,
) -> Option<Reminder> {
    let days = days_until(due, now);
    let tier = UrgencyTier::for_days(days);
    if !tier.notifies() {
        return None;
    }
    Some(Reminder {
        subject,
        subject_id,
        project_id,
        tier,
        days_until: days,
        overdue: due < now,
        sent_on: now.date_naive(),
    })
}

/// Outcome of a weather flag request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherFlagOutcome {
    Flagged,
    NotOutdoor,
}

/// Validate a weather condition and decide whether the task is eligible.
///
/// Indoor tasks are a soft no-op rather than an error.
pub fn evaluate_weather_flag(is_outdoor: bool, condition: &str) -> Result<WeatherFlagOutcome, CoreError> {
    require_text("condition", condition, MAX_SHORT_TEXT_LEN)?;
    if is_outdoor {
        Ok(WeatherFlagOutcome::Flagged)
    } else {
        Ok(WeatherFlagOutcome::NotOutdoor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(UrgencyTier::for_days(-4), UrgencyTier::Urgent);
        assert_eq!(UrgencyTier::for_days(0), UrgencyTier::Urgent);
        assert_eq!(UrgencyTier::for_days(2), UrgencyTier::Urgent);
        assert_eq!(UrgencyTier::for_days(3), UrgencyTier::Soon);
        assert_eq!(UrgencyTier::for_days(6), UrgencyTier::Soon);
        assert_eq!(UrgencyTier::for_days(7), UrgencyTier::Upcoming);
        assert_eq!(UrgencyTier::for_days(13), UrgencyTier::Upcoming);
        assert_eq!(UrgencyTier::for_days(14), UrgencyTier::Normal);
        assert_eq!(UrgencyTier::for_days(90), UrgencyTier::Normal);
    }

    #[test]
    fn days_until_floors() {
        let n = now();
        assert_eq!(days_until(n + Duration::hours(5), n), 0);
        assert_eq!(days_until(n + Duration::hours(71), n), 2);
        assert_eq!(days_until(n + Duration::hours(72), n), 3);
        assert_eq!(days_until(n - Duration::hours(1), n), -1);
        assert_eq!(days_until(n - Duration::hours(25), n), -2);
    }

    #[test]
    fn normal_tier_is_not_notified() {
        let n = now();
        assert!(plan_reminder(ReminderSubject::Task, 1, 1, n + Duration::days(20), n).is_none());
    }

    #[test]
    fn urgent_reminder_planned() {
        let n = now();
        let r = plan_reminder(ReminderSubject::Task, 4, 2, n + Duration::days(1), n).unwrap();
        assert_eq!(r.tier, UrgencyTier::Urgent);
        assert_eq!(r.days_until, 1);
        assert!(!r.overdue);
        assert_eq!(r.sent_on, n.date_naive());
        assert_eq!(r.project_id, 2);
    }

    #[test]
    fn overdue_reminder_is_urgent_and_flagged() {
        let n = now();
        let r = plan_reminder(ReminderSubject::Permit, 9, 2, n - Duration::days(2), n).unwrap();
        assert_eq!(r.tier, UrgencyTier::Urgent);
        assert!(r.overdue);
        assert_eq!(r.subject.event_type(), "permit.reminder");
    }

    #[test]
    fn tier_escalates_as_due_date_nears() {
        let due = now() + Duration::days(10);
        let tiers: Vec<_> = [0, 4, 8, 9]
            .into_iter()
            .map(|elapsed| {
                plan_reminder(ReminderSubject::Task, 1, 1, due, now() + Duration::days(elapsed))
                    .unwrap()
                    .tier
            })
            .collect();
        assert_eq!(
            tiers,
            vec![
                UrgencyTier::Upcoming,
                UrgencyTier::Soon,
                UrgencyTier::Urgent,
                UrgencyTier::Urgent
            ]
        );
    }

    #[test]
    fn indoor_task_is_soft_no_op() {
        assert_eq!(
            evaluate_weather_flag(false, "thunderstorm").unwrap(),
            WeatherFlagOutcome::NotOutdoor
        );
    }

    #[test]
    fn outdoor_task_is_flagged() {
        assert_eq!(
            evaluate_weather_flag(true, "high wind").unwrap(),
            WeatherFlagOutcome::Flagged
        );
    }

    #[test]
    fn empty_condition_rejected() {
        assert!(evaluate_weather_flag(true, "").is_err());
    }
}
