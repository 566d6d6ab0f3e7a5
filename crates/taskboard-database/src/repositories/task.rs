//! Task repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::task::{CreateTask, Task, TaskFilter, UpdateTask};

use crate::store::TaskStore;

/// Repository for tasks.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn create(&self, data: &CreateTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, column_id, title, description, priority, assignee_id, position) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.column_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.priority)
        .bind(data.assignee_id)
        .bind(data.position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    async fn list_by_column(&self, column_id: Uuid) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE column_id = $1 ORDER BY position ASC, created_at ASC",
        )
        .bind(column_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))
    }

    async fn list_by_columns(
        &self,
        column_ids: &[Uuid],
        filter: &TaskFilter,
    ) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks \
             WHERE column_id = ANY($1) \
               AND ($2::uuid IS NULL OR column_id = $2) \
               AND ($3::task_priority IS NULL OR priority = $3) \
               AND ($4::uuid IS NULL OR assignee_id = $4) \
             ORDER BY position ASC, created_at ASC",
        )
        .bind(column_ids)
        .bind(filter.column_id)
        .bind(filter.priority)
        .bind(filter.assignee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to filter tasks", e))
    }

    async fn update(&self, id: Uuid, data: &UpdateTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = COALESCE($2, title), \
                              description = COALESCE($3, description), \
                              priority = COALESCE($4, priority), \
                              assignee_id = CASE WHEN $5 THEN $6 ELSE assignee_id END, \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.priority)
        .bind(data.assignee_id.is_some())
        .bind(data.assignee_id.flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task", e))?
        .ok_or_else(|| AppError::not_found(format!("Task {id} not found")))
    }

    async fn move_to(&self, id: Uuid, column_id: Uuid, position: f64) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET column_id = $2, position = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(column_id)
        .bind(position)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Column {column_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to move task", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Task {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete task", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_positions(&self, positions: &[(Uuid, f64)]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (id, position) in positions {
            sqlx::query("UPDATE tasks SET position = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(position)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to reposition task", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit task positions", e)
        })
    }
}
