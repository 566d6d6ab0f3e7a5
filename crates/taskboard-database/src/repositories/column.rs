//! Column repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::board::{Column, CreateColumn, UpdateColumn};

use crate::store::ColumnStore;

/// Repository for board columns.
#[derive(Debug, Clone)]
pub struct ColumnRepository {
    pool: PgPool,
}

impl ColumnRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ColumnStore for ColumnRepository {
    async fn create(&self, data: &CreateColumn) -> AppResult<Column> {
        sqlx::query_as::<_, Column>(
            "INSERT INTO columns (id, board_id, name, position) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.board_id)
        .bind(&data.name)
        .bind(data.position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create column", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Column>> {
        sqlx::query_as::<_, Column>("SELECT * FROM columns WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find column", e))
    }

    async fn list_by_board(&self, board_id: Uuid) -> AppResult<Vec<Column>> {
        sqlx::query_as::<_, Column>(
            "SELECT * FROM columns WHERE board_id = $1 ORDER BY position ASC, created_at ASC",
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list columns", e))
    }

    async fn update(&self, id: Uuid, data: &UpdateColumn) -> AppResult<Column> {
        sqlx::query_as::<_, Column>(
            "UPDATE columns SET name = COALESCE($2, name), \
                                position = COALESCE($3, position), \
                                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.position)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update column", e))?
        .ok_or_else(|| AppError::not_found(format!("Column {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM columns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete column", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_positions(&self, positions: &[(Uuid, f64)]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (id, position) in positions {
            sqlx::query("UPDATE columns SET position = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(position)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to reposition column", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit column positions", e)
        })
    }
}
