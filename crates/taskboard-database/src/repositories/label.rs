//! Label repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::label::{CreateLabel, Label};

use crate::store::LabelStore;

/// Repository for labels and their task associations.
#[derive(Debug, Clone)]
pub struct LabelRepository {
    pool: PgPool,
}

impl LabelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabelStore for LabelRepository {
    async fn create(&self, data: &CreateLabel) -> AppResult<Label> {
        sqlx::query_as::<_, Label>(
            "INSERT INTO labels (id, project_id, name, color) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.project_id)
        .bind(&data.name)
        .bind(&data.color)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create label", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Label>> {
        sqlx::query_as::<_, Label>("SELECT * FROM labels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find label", e))
    }

    async fn list_by_project(&self, project_id: Uuid) -> AppResult<Vec<Label>> {
        sqlx::query_as::<_, Label>("SELECT * FROM labels WHERE project_id = $1 ORDER BY name ASC")
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list labels", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM labels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete label", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn attach(&self, task_id: Uuid, label_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO task_labels (task_id, label_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(task_id)
        .bind(label_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to attach label", e))?;

        Ok(())
    }

    async fn detach(&self, task_id: Uuid, label_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM task_labels WHERE task_id = $1 AND label_id = $2")
            .bind(task_id)
            .bind(label_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to detach label", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_task(&self, task_id: Uuid) -> AppResult<Vec<Label>> {
        sqlx::query_as::<_, Label>(
            "SELECT l.* FROM labels l \
             JOIN task_labels tl ON tl.label_id = l.id \
             WHERE tl.task_id = $1 \
             ORDER BY l.name ASC",
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list task labels", e))
    }
}
