//! Board repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::board::{Board, CreateBoard};

use crate::store::BoardStore;

/// Repository for boards.
#[derive(Debug, Clone)]
pub struct BoardRepository {
    pool: PgPool,
}

impl BoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardStore for BoardRepository {
    async fn create(&self, data: &CreateBoard) -> AppResult<Board> {
        sqlx::query_as::<_, Board>(
            "INSERT INTO boards (id, project_id, name) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.project_id)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create board", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find board", e))
    }

    async fn list_by_project(&self, project_id: Uuid) -> AppResult<Vec<Board>> {
        sqlx::query_as::<_, Board>(
            "SELECT * FROM boards WHERE project_id = $1 ORDER BY created_at ASC",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list boards", e))
    }

    async fn rename(&self, id: Uuid, name: &str) -> AppResult<Board> {
        sqlx::query_as::<_, Board>(
            "UPDATE boards SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename board", e))?
        .ok_or_else(|| AppError::not_found(format!("Board {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete board", e))?;

        Ok(result.rows_affected() > 0)
    }
}
