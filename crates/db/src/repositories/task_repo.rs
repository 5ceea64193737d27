//! Repository for the `tasks` table, including crew assignment.

use ampsite_core::crew::{self, CrewCommitment};
use ampsite_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::reminder::DatedSubject;
use crate::models::task::{AssignOutcome, CreateTask, Task};

const COLUMNS: &str = "id, project_id, description, due_date, assigned_crew_id, is_outdoor, \
    created_by, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new unassigned task.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateTask,
        created_by: &str,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, description, due_date, is_outdoor, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(input.description.trim())
            .bind(input.due_date)
            .bind(input.is_outdoor)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All tasks ordered by due date ascending. Ties keep insertion order.
    pub async fn list_by_due_date(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY due_date ASC, id ASC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Tasks due before `horizon`, overdue ones included.
    pub async fn list_due_before(
        pool: &PgPool,
        horizon: Timestamp,
    ) -> Result<Vec<DatedSubject>, sqlx::Error> {
        sqlx::query_as::<_, DatedSubject>(
            "SELECT id, project_id, due_date AS due, description AS label
             FROM tasks WHERE due_date < $1 ORDER BY due_date, id",
        )
        .bind(horizon)
        .fetch_all(pool)
        .await
    }

    /// Assign `crew_id` to a task unless the crew already holds an
    /// overlapping task.
    ///
    /// A transaction-scoped advisory lock keyed on the crew serializes
    /// concurrent assignments of the same crew, so the overlap check and the
    /// write cannot interleave with another assignment of that crew.
    pub async fn assign_crew(
        pool: &PgPool,
        task_id: DbId,
        crew_id: DbId,
    ) -> Result<AssignOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended('crew:' || $1::TEXT, 0))")
            .bind(crew_id)
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 FOR UPDATE");
        let Some(task) = sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(AssignOutcome::TaskNotFound);
        };

        let commitments: Vec<CrewCommitment> = sqlx::query_as::<_, (DbId, Timestamp)>(
            "SELECT id, due_date FROM tasks WHERE assigned_crew_id = $1 AND id <> $2",
        )
        .bind(crew_id)
        .bind(task_id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|(task_id, due_date)| CrewCommitment { task_id, due_date })
        .collect();

        if let Err(err) = crew::check_assignment(crew_id, task.id, task.due_date, &commitments) {
            tx.rollback().await?;
            return Ok(AssignOutcome::Rejected(err));
        }

        let query = format!(
            "UPDATE tasks SET assigned_crew_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .bind(crew_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(AssignOutcome::Assigned(updated))
    }
}
