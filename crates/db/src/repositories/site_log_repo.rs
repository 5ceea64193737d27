//! Repository for the append-only field record tables: `check_ins`,
//! `mileage_logs`, `photo_annotations` and `compliance_verifications`.

use ampsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_log::{
    CheckIn, ComplianceVerification, CreateCheckIn, CreateComplianceVerification,
    CreateMileageLog, CreatePhotoAnnotation, MileageLog, PhotoAnnotation,
};

const CHECK_IN_COLUMNS: &str = "id, project_id, crew_member_name, checked_in_by, checked_in_at";

const MILEAGE_COLUMNS: &str =
    "id, project_id, miles, drive_time_minutes, logged_by, created_at";

const PHOTO_COLUMNS: &str = "id, project_id, task_id, description, created_by, created_at";

const COMPLIANCE_COLUMNS: &str =
    "id, project_id, code_section, verified_by, recorded_by, created_at";

/// Provides insert and list operations for site records.
pub struct SiteLogRepo;

impl SiteLogRepo {
    pub async fn create_check_in(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateCheckIn,
        checked_in_by: &str,
    ) -> Result<CheckIn, sqlx::Error> {
        let query = format!(
            "INSERT INTO check_ins (project_id, crew_member_name, checked_in_by)
             VALUES ($1, $2, $3)
             RETURNING {CHECK_IN_COLUMNS}"
        );
        sqlx::query_as::<_, CheckIn>(&query)
            .bind(project_id)
            .bind(input.crew_member_name.trim())
            .bind(checked_in_by)
            .fetch_one(pool)
            .await
    }

    pub async fn list_check_ins(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<CheckIn>, sqlx::Error> {
        let query = format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, CheckIn>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create_mileage(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateMileageLog,
        logged_by: &str,
    ) -> Result<MileageLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO mileage_logs (project_id, miles, drive_time_minutes, logged_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {MILEAGE_COLUMNS}"
        );
        sqlx::query_as::<_, MileageLog>(&query)
            .bind(project_id)
            .bind(input.miles)
            .bind(input.drive_time_minutes)
            .bind(logged_by)
            .fetch_one(pool)
            .await
    }

    pub async fn list_mileage(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<MileageLog>, sqlx::Error> {
        let query = format!(
            "SELECT {MILEAGE_COLUMNS} FROM mileage_logs WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, MileageLog>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Annotate a photo against a task. Returns `None` when the task does not
    /// belong to the project.
    pub async fn create_photo_annotation(
        pool: &PgPool,
        project_id: DbId,
        input: &CreatePhotoAnnotation,
        created_by: &str,
    ) -> Result<Option<PhotoAnnotation>, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_annotations (project_id, task_id, description, created_by)
             SELECT $1, t.id, $3, $4 FROM tasks t WHERE t.id = $2 AND t.project_id = $1
             RETURNING {PHOTO_COLUMNS}"
        );
        sqlx::query_as::<_, PhotoAnnotation>(&query)
            .bind(project_id)
            .bind(input.task_id)
            .bind(input.description.trim())
            .bind(created_by)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_photo_annotations(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PhotoAnnotation>, sqlx::Error> {
        let query = format!(
            "SELECT {PHOTO_COLUMNS} FROM photo_annotations WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, PhotoAnnotation>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create_compliance(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateComplianceVerification,
        recorded_by: &str,
    ) -> Result<ComplianceVerification, sqlx::Error> {
        let query = format!(
            "INSERT INTO compliance_verifications (project_id, code_section, verified_by, recorded_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COMPLIANCE_COLUMNS}"
        );
        sqlx::query_as::<_, ComplianceVerification>(&query)
            .bind(project_id)
            .bind(input.code_section.trim())
            .bind(input.verified_by.trim())
            .bind(recorded_by)
            .fetch_one(pool)
            .await
    }

    pub async fn list_compliance(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ComplianceVerification>, sqlx::Error> {
        let query = format!(
            "SELECT {COMPLIANCE_COLUMNS} FROM compliance_verifications
             WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ComplianceVerification>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
