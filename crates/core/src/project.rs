//! Project registry rules: creation validation and the status state machine.
//!
//! Status IDs match the `project_statuses` seed data (1-based SMALLSERIAL).
//! The `db` crate mirrors them as `ProjectStatus`; `core` works on raw ids
//! so it stays free of internal deps.

use crate::error::CoreError;
use crate::fields::{bounded_text, require_amount, require_text, MAX_LONG_TEXT_LEN, MAX_SHORT_TEXT_LEN};
use crate::types::Timestamp;

pub const STATUS_PLANNED: i16 = 1;
pub const STATUS_IN_PROGRESS: i16 = 2;
pub const STATUS_COMPLETED: i16 = 3;

/// Wire names for each status, in id order.
pub const STATUS_NAMES: &[(i16, &str)] = &[
    (STATUS_PLANNED, "planned"),
    (STATUS_IN_PROGRESS, "inProgress"),
    (STATUS_COMPLETED, "completed"),
];

/// Human-readable name for a status id.
pub fn status_name(id: i16) -> &'static str {
    STATUS_NAMES
        .iter()
        .find(|(sid, _)| *sid == id)
        .map(|(_, name)| *name)
        .unwrap_or("unknown")
}

/// Resolve a wire name (`planned`, `inProgress`, `completed`) to its id.
pub fn parse_status(name: &str) -> Result<i16, CoreError> {
    STATUS_NAMES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(id, _)| *id)
        .ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "Invalid project status '{name}'. Must be one of: planned, inProgress, completed"
            ))
        })
}

/// Project status transitions: strictly forward, one step at a time.
pub mod state_machine {
    use super::*;

    pub fn valid_transitions(from_status: i16) -> &'static [i16] {
        match from_status {
            STATUS_PLANNED => &[STATUS_IN_PROGRESS],
            STATUS_IN_PROGRESS => &[STATUS_COMPLETED],
            _ => &[],
        }
    }

    pub fn can_transition(from: i16, to: i16) -> bool {
        valid_transitions(from).contains(&to)
    }

    pub fn validate_transition(from: i16, to: i16) -> Result<(), CoreError> {
        if can_transition(from, to) {
            Ok(())
        } else {
            Err(CoreError::InvalidInput(format!(
                "Invalid project status transition: {} -> {}",
                status_name(from),
                status_name(to)
            )))
        }
    }
}

/// Fields supplied by the caller when creating a project.
#[derive(Debug, Clone, Copy)]
pub struct NewProjectFields<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub client_name: &'a str,
    pub general_contractor: &'a str,
    pub project_value: f64,
    pub notes: &'a str,
    pub estimated_completion_date: Option<Timestamp>,
}

/// Validate a project creation request. `now` becomes the start date.
pub fn validate_new_project(fields: &NewProjectFields<'_>, now: Timestamp) -> Result<(), CoreError> {
    require_text("name", fields.name, MAX_SHORT_TEXT_LEN)?;
    require_text("location", fields.location, MAX_SHORT_TEXT_LEN)?;
    require_text("client_name", fields.client_name, MAX_SHORT_TEXT_LEN)?;
    require_text("general_contractor", fields.general_contractor, MAX_SHORT_TEXT_LEN)?;
    bounded_text("notes", fields.notes, MAX_LONG_TEXT_LEN)?;
    // Project value problems are plain input errors at this boundary.
    require_amount("project_value", fields.project_value)
        .map_err(|e| CoreError::InvalidInput(e.to_string()))?;

    if let Some(eta) = fields.estimated_completion_date {
        if eta < now {
            return Err(CoreError::InvalidInput(
                "estimated_completion_date must not precede the start date".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::state_machine::*;
    use super::*;
    use chrono::{Duration, Utc};

    fn fields() -> NewProjectFields<'static> {
        NewProjectFields {
            name: "Riverside Panel Upgrade",
            location: "12 Mill St",
            client_name: "Riverside HOA",
            general_contractor: "Acme Builders",
            project_value: 10_000.0,
            notes: "",
            estimated_completion_date: None,
        }
    }

    #[test]
    fn planned_to_in_progress() {
        assert!(can_transition(STATUS_PLANNED, STATUS_IN_PROGRESS));
    }

    #[test]
    fn in_progress_to_completed() {
        assert!(can_transition(STATUS_IN_PROGRESS, STATUS_COMPLETED));
    }

    #[test]
    fn skipping_is_rejected() {
        assert!(!can_transition(STATUS_PLANNED, STATUS_COMPLETED));
    }

    #[test]
    fn reverse_is_rejected() {
        assert!(!can_transition(STATUS_IN_PROGRESS, STATUS_PLANNED));
        assert!(!can_transition(STATUS_COMPLETED, STATUS_IN_PROGRESS));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(valid_transitions(STATUS_COMPLETED).is_empty());
    }

    #[test]
    fn same_status_is_not_a_transition() {
        assert!(!can_transition(STATUS_PLANNED, STATUS_PLANNED));
    }

    #[test]
    fn invalid_transition_message_uses_names() {
        let err = validate_transition(STATUS_COMPLETED, STATUS_PLANNED).unwrap_err();
        assert!(err.to_string().contains("completed -> planned"));
    }

    #[test]
    fn status_names_round_trip() {
        for (id, name) in STATUS_NAMES {
            assert_eq!(parse_status(name).unwrap(), *id);
            assert_eq!(status_name(*id), *name);
        }
        assert!(parse_status("archived").is_err());
        assert_eq!(status_name(42), "unknown");
    }

    #[test]
    fn valid_project_passes() {
        assert!(validate_new_project(&fields(), Utc::now()).is_ok());
    }

    #[test]
    fn zero_value_project_is_allowed() {
        let f = NewProjectFields { project_value: 0.0, ..fields() };
        assert!(validate_new_project(&f, Utc::now()).is_ok());
    }

    #[test]
    fn missing_required_strings_rejected() {
        for f in [
            NewProjectFields { name: "", ..fields() },
            NewProjectFields { location: " ", ..fields() },
            NewProjectFields { client_name: "", ..fields() },
            NewProjectFields { general_contractor: "", ..fields() },
        ] {
            assert!(matches!(
                validate_new_project(&f, Utc::now()),
                Err(CoreError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn negative_value_is_invalid_input() {
        let f = NewProjectFields { project_value: -1.0, ..fields() };
        assert!(matches!(
            validate_new_project(&f, Utc::now()),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn completion_before_start_rejected() {
        let now = Utc::now();
        let f = NewProjectFields {
            estimated_completion_date: Some(now - Duration::days(1)),
            ..fields()
        };
        assert!(validate_new_project(&f, now).is_err());

        let f = NewProjectFields {
            estimated_completion_date: Some(now + Duration::days(30)),
            ..fields()
        };
        assert!(validate_new_project(&f, now).is_ok());
    }
}
