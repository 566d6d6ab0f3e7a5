//! Resolves the owning project of any entity and compares its owner.
//!
//! Every entity below a project stores only its parent's id, so the
//! owner is found by walking `task → column → board → project` one fetch
//! at a time. A missing hop fails with `NotFound`, a different owner with
//! `Forbidden`. Nothing is cached between calls.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::{BoardStore, ColumnStore, LabelStore, ProjectStore, TaskStore};
use taskboard_entity::board::{Board, Column};
use taskboard_entity::label::Label;
use taskboard_entity::project::Project;
use taskboard_entity::task::Task;

/// Walks parent references up to a project and checks its owner.
#[derive(Clone)]
pub struct OwnershipResolver {
    projects: Arc<dyn ProjectStore>,
    boards: Arc<dyn BoardStore>,
    columns: Arc<dyn ColumnStore>,
    tasks: Arc<dyn TaskStore>,
    labels: Arc<dyn LabelStore>,
}

impl OwnershipResolver {
    pub fn new(
        projects: Arc<dyn ProjectStore>,
        boards: Arc<dyn BoardStore>,
        columns: Arc<dyn ColumnStore>,
        tasks: Arc<dyn TaskStore>,
        labels: Arc<dyn LabelStore>,
    ) -> Self {
        Self {
            projects,
            boards,
            columns,
            tasks,
            labels,
        }
    }

    /// Returns the project if `owner_id` owns it.
    pub async fn authorize_project(
        &self,
        project_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Project, AppError> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Project {project_id} not found")))?;

        if !project.is_owned_by(owner_id) {
            warn!(
                project_id = %project_id,
                user_id = %owner_id,
                "Ownership check failed"
            );
            return Err(AppError::forbidden(
                "You do not have access to this project",
            ));
        }

        Ok(project)
    }

    pub async fn authorize_board(&self, board_id: Uuid, owner_id: Uuid) -> Result<Board, AppError> {
        let (board, _) = self.authorize_board_with_project(board_id, owner_id).await?;
        Ok(board)
    }

    pub async fn authorize_board_with_project(
        &self,
        board_id: Uuid,
        owner_id: Uuid,
    ) -> Result<(Board, Project), AppError> {
        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Board {board_id} not found")))?;

        debug!(board_id = %board_id, project_id = %board.project_id, "Resolved board");
        let project = self.authorize_project(board.project_id, owner_id).await?;
        Ok((board, project))
    }

    pub async fn authorize_column(
        &self,
        column_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Column, AppError> {
        let (column, _) = self
            .authorize_column_with_project(column_id, owner_id)
            .await?;
        Ok(column)
    }

    pub async fn authorize_column_with_project(
        &self,
        column_id: Uuid,
        owner_id: Uuid,
    ) -> Result<(Column, Project), AppError> {
        let column = self
            .columns
            .find_by_id(column_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Column {column_id} not found")))?;

        debug!(column_id = %column_id, board_id = %column.board_id, "Resolved column");
        let (_, project) = self
            .authorize_board_with_project(column.board_id, owner_id)
            .await?;
        Ok((column, project))
    }

    pub async fn authorize_task(&self, task_id: Uuid, owner_id: Uuid) -> Result<Task, AppError> {
        let (task, _) = self.authorize_task_with_project(task_id, owner_id).await?;
        Ok(task)
    }

    pub async fn authorize_task_with_project(
        &self,
        task_id: Uuid,
        owner_id: Uuid,
    ) -> Result<(Task, Project), AppError> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task {task_id} not found")))?;

        debug!(task_id = %task_id, column_id = %task.column_id, "Resolved task");
        let (_, project) = self
            .authorize_column_with_project(task.column_id, owner_id)
            .await?;
        Ok((task, project))
    }

    /// Labels hang directly off a project.
    pub async fn authorize_label(&self, label_id: Uuid, owner_id: Uuid) -> Result<Label, AppError> {
        let label = self
            .labels
            .find_by_id(label_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Label {label_id} not found")))?;

        self.authorize_project(label.project_id, owner_id).await?;
        Ok(label)
    }
}
