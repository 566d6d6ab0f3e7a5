//! Project CRUD with default board bootstrap.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::{ProjectBootstrap, ProjectStore};
use taskboard_entity::board::model::DEFAULT_BOARD_NAME;
use taskboard_entity::board::column::DEFAULT_COLUMN_NAMES;
use taskboard_entity::project::{CreateProject, Project, UpdateProject};

use crate::context::RequestContext;
use crate::ownership::OwnershipResolver;
use crate::position::PositionAllocator;

/// Manages projects owned by the calling user.
#[derive(Clone)]
pub struct ProjectService {
    projects: Arc<dyn ProjectStore>,
    resolver: Arc<OwnershipResolver>,
}

/// Request to create a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Partial project update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(projects: Arc<dyn ProjectStore>, resolver: Arc<OwnershipResolver>) -> Self {
        Self { projects, resolver }
    }

    /// Creates a project with a "Main Board" holding the default columns.
    ///
    /// The project, board and columns are written as one unit.
    pub async fn create_project(
        &self,
        ctx: &RequestContext,
        req: CreateProjectRequest,
    ) -> Result<ProjectBootstrap, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name is required"));
        }

        let columns: Vec<(String, f64)> = DEFAULT_COLUMN_NAMES
            .iter()
            .map(|name| name.to_string())
            .zip(PositionAllocator::initial_positions(DEFAULT_COLUMN_NAMES.len()))
            .collect();

        let created = self
            .projects
            .create_with_board(
                &CreateProject {
                    name: name.to_string(),
                    description: req.description,
                    owner_id: ctx.user_id,
                },
                DEFAULT_BOARD_NAME,
                &columns,
            )
            .await?;

        info!(
            user_id = %ctx.user_id,
            project_id = %created.project.id,
            board_id = %created.board.id,
            "Project created"
        );

        Ok(created)
    }

    /// Lists the caller's projects, newest first.
    pub async fn list_projects(&self, ctx: &RequestContext) -> Result<Vec<Project>, AppError> {
        self.projects.list_by_owner(ctx.user_id).await
    }

    /// Gets a project owned by the caller.
    pub async fn get_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Project, AppError> {
        self.resolver
            .authorize_project(project_id, ctx.user_id)
            .await
    }

    /// Updates name and/or description.
    pub async fn update_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        req: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let name = match req.name {
            Some(name) if name.trim().is_empty() => {
                return Err(AppError::validation("name cannot be empty"));
            }
            Some(name) => Some(name.trim().to_string()),
            None => None,
        };

        self.resolver
            .authorize_project(project_id, ctx.user_id)
            .await?;

        let project = self
            .projects
            .update(
                project_id,
                &UpdateProject {
                    name,
                    description: req.description,
                },
            )
            .await?;

        info!(user_id = %ctx.user_id, project_id = %project_id, "Project updated");
        Ok(project)
    }

    /// Deletes a project along with everything under it.
    pub async fn delete_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<(), AppError> {
        self.resolver
            .authorize_project(project_id, ctx.user_id)
            .await?;

        if !self.projects.delete(project_id).await? {
            return Err(AppError::not_found(format!("Project {project_id} not found")));
        }

        info!(user_id = %ctx.user_id, project_id = %project_id, "Project deleted");
        Ok(())
    }
}
