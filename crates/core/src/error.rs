use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("{entity} {id} has already been resolved")]
    AlreadyResolved { entity: &'static str, id: DbId },

    #[error("Crew {crew_id} is already assigned to task {conflicting_task_id} in an overlapping window (requested task {task_id})")]
    CrewConflict {
        crew_id: DbId,
        task_id: DbId,
        conflicting_task_id: DbId,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
