//! Validation for append-only field records: tasks, permits, safety
//! incidents, crew check-ins, mileage, photo annotations and code
//! compliance verifications.

use crate::error::CoreError;
use crate::fields::{require_amount, require_text, MAX_LONG_TEXT_LEN, MAX_SHORT_TEXT_LEN};

/// Upper bound for a single mileage entry.
pub const MAX_MILES_PER_ENTRY: f64 = 10_000.0;

/// Upper bound for drive time in a single entry (one week).
pub const MAX_DRIVE_MINUTES: i64 = 7 * 24 * 60;

pub fn validate_task(description: &str) -> Result<(), CoreError> {
    require_text("description", description, MAX_LONG_TEXT_LEN)
}

pub fn validate_permit(permit_number: &str, inspector_name: &str) -> Result<(), CoreError> {
    require_text("permit_number", permit_number, MAX_SHORT_TEXT_LEN)?;
    require_text("inspector_name", inspector_name, MAX_SHORT_TEXT_LEN)
}

pub fn validate_incident(description: &str, reporter_name: &str) -> Result<(), CoreError> {
    require_text("description", description, MAX_LONG_TEXT_LEN)?;
    require_text("reported_by", reporter_name, MAX_SHORT_TEXT_LEN)
}

pub fn validate_check_in(crew_member_name: &str) -> Result<(), CoreError> {
    require_text("crew_member_name", crew_member_name, MAX_SHORT_TEXT_LEN)
}

pub fn validate_mileage(miles: f64, drive_time_minutes: i64) -> Result<(), CoreError> {
    require_amount("miles", miles)?;
    if miles > MAX_MILES_PER_ENTRY {
        return Err(CoreError::InvalidAmount(format!(
            "miles must be at most {MAX_MILES_PER_ENTRY}"
        )));
    }
    if !(0..=MAX_DRIVE_MINUTES).contains(&drive_time_minutes) {
        return Err(CoreError::InvalidInput(format!(
            "drive_time_minutes must be between 0 and {MAX_DRIVE_MINUTES}"
        )));
    }
    Ok(())
}

pub fn validate_photo_annotation(description: &str) -> Result<(), CoreError> {
    require_text("description", description, MAX_LONG_TEXT_LEN)
}

pub fn validate_compliance(code_section: &str, verified_by: &str) -> Result<(), CoreError> {
    require_text("code_section", code_section, MAX_SHORT_TEXT_LEN)?;
    require_text("verified_by", verified_by, MAX_SHORT_TEXT_LEN)
}
