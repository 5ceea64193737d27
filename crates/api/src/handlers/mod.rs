//! Request handlers, one module per resource.

pub mod change_order;
pub mod dashboard;
pub mod ledger;
pub mod permit;
pub mod project;
pub mod reminders;
pub mod safety;
pub mod site_log;
pub mod task;
pub mod user;

use ampsite_core::types::DbId;
use ampsite_db::repositories::ProjectRepo;
use ampsite_db::DbPool;

use crate::error::{AppError, AppResult};

/// Fail with 404 unless the project exists.
pub(crate) async fn ensure_project_exists(pool: &DbPool, project_id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(pool, project_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found("Project", project_id))
    }
}
