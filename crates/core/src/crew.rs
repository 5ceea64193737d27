//! Crew-to-task conflict detection.
//!
//! Tasks only carry a due date, so each task is taken to occupy the whole
//! UTC calendar day of that due date as a closed interval
//! `[00:00:00, 23:59:59.999999999]`. Two windows conflict when they share
//! any instant, which for whole-day windows means "same UTC day".

use chrono::{Duration, NaiveTime, TimeZone, Utc};

use crate::error::CoreError;
use crate::fields::require_positive_id;
use crate::types::{DbId, Timestamp};

/// Closed time interval a crew is occupied by a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl WorkWindow {
    /// The full UTC day containing `due_date`.
    pub fn for_due_date(due_date: Timestamp) -> Self {
        let midnight = due_date.date_naive().and_time(NaiveTime::MIN);
        let start = Utc.from_utc_datetime(&midnight);
        let end = start + Duration::days(1) - Duration::nanoseconds(1);
        Self { start, end }
    }

    /// Closed-interval overlap: shared endpoints count as overlapping.
    pub fn overlaps(&self, other: &WorkWindow) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// A task already held by the crew being assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewCommitment {
    pub task_id: DbId,
    pub due_date: Timestamp,
}

/// Return the first existing commitment (other than `task_id` itself) whose
/// window overlaps the target task's window.
pub fn find_conflict(
    task_id: DbId,
    due_date: Timestamp,
    commitments: &[CrewCommitment],
) -> Option<DbId> {
    let window = WorkWindow::for_due_date(due_date);
    commitments
        .iter()
        .filter(|c| c.task_id != task_id)
        .find(|c| WorkWindow::for_due_date(c.due_date).overlaps(&window))
        .map(|c| c.task_id)
}

/// Validate an assignment of `crew_id` to `task_id` against the crew's
/// existing commitments.
pub fn check_assignment(
    crew_id: DbId,
    task_id: DbId,
    due_date: Timestamp,
    commitments: &[CrewCommitment],
) -> Result<(), CoreError> {
    require_positive_id("crew_id", crew_id)?;
    match find_conflict(task_id, due_date, commitments) {
        Some(conflicting_task_id) => Err(CoreError::CrewConflict {
            crew_id,
            task_id,
            conflicting_task_id,
        }),
        None => Ok(()),
    }
}
