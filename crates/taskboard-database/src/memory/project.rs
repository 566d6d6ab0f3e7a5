use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_core::result::AppResult;
use taskboard_entity::board::{CreateBoard, CreateColumn};
use taskboard_entity::project::{CreateProject, Project, UpdateProject};

use super::{MemoryBoardStore, MemoryColumnStore};
use crate::store::{BoardStore, ColumnStore, ProjectBootstrap, ProjectStore};

#[derive(Debug)]
pub struct MemoryProjectStore {
    projects: DashMap<Uuid, Project>,
    boards: Arc<MemoryBoardStore>,
    columns: Arc<MemoryColumnStore>,
}

impl MemoryProjectStore {
    pub fn new(boards: Arc<MemoryBoardStore>, columns: Arc<MemoryColumnStore>) -> Self {
        Self {
            projects: DashMap::new(),
            boards,
            columns,
        }
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn create_with_board(
        &self,
        project: &CreateProject,
        board_name: &str,
        columns: &[(String, f64)],
    ) -> AppResult<ProjectBootstrap> {
        let now = Utc::now();
        let created = Project {
            id: Uuid::new_v4(),
            name: project.name.clone(),
            description: project.description.clone(),
            owner_id: project.owner_id,
            created_at: now,
            updated_at: now,
        };
        self.projects.insert(created.id, created.clone());

        let board = self
            .boards
            .create(&CreateBoard {
                project_id: created.id,
                name: board_name.to_string(),
            })
            .await?;

        let mut created_columns = Vec::with_capacity(columns.len());
        for (name, position) in columns {
            let column = self
                .columns
                .create(&CreateColumn {
                    board_id: board.id,
                    name: name.clone(),
                    position: *position,
                })
                .await?;
            created_columns.push(column);
        }

        Ok(ProjectBootstrap {
            project: created,
            board,
            columns: created_columns,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        Ok(self.projects.get(&id).map(|r| r.value().clone()))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|r| r.value().owner_id == owner_id)
            .map(|r| r.value().clone())
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn update(&self, id: Uuid, data: &UpdateProject) -> AppResult<Project> {
        let mut project = self
            .projects
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))?;
        if let Some(name) = &data.name {
            project.name = name.clone();
        }
        if let Some(description) = &data.description {
            project.description = description.clone();
        }
        project.updated_at = Utc::now();
        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.projects.remove(&id).is_some())
    }
}
