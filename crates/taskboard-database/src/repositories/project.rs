//! Project repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use taskboard_core::error::{AppError, ErrorKind};
use taskboard_core::result::AppResult;
use taskboard_entity::board::{Board, Column};
use taskboard_entity::project::{CreateProject, Project, UpdateProject};

use crate::store::{ProjectBootstrap, ProjectStore};

/// Repository for projects.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn create_with_board(
        &self,
        project: &CreateProject,
        board_name: &str,
        columns: &[(String, f64)],
    ) -> AppResult<ProjectBootstrap> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let created = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (id, name, description, owner_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to create project"))?;

        let board = sqlx::query_as::<_, Board>(
            "INSERT INTO boards (id, project_id, name) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(created.id)
        .bind(board_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to create default board"))?;

        let mut created_columns = Vec::with_capacity(columns.len());
        for (name, position) in columns {
            let column = sqlx::query_as::<_, Column>(
                "INSERT INTO columns (id, board_id, name, position) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING *",
            )
            .bind(Uuid::new_v4())
            .bind(board.id)
            .bind(name)
            .bind(position)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("Failed to create default column"))?;
            created_columns.push(column);
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit project creation"))?;

        Ok(ProjectBootstrap {
            project: created,
            board,
            columns: created_columns,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find project"))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list projects"))
    }

    async fn update(&self, id: Uuid, data: &UpdateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = COALESCE($2, name), \
                                 description = COALESCE($3, description), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update project"))?
        .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete project"))?;

        Ok(result.rows_affected() > 0)
    }
}
