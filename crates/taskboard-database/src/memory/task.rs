use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_core::result::AppResult;
use taskboard_entity::task::{CreateTask, Task, TaskFilter, UpdateTask};

use super::by_position;
use crate::store::TaskStore;

#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: DashMap<Uuid, Task>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn create(&self, data: &CreateTask) -> AppResult<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            column_id: data.column_id,
            title: data.title.clone(),
            description: data.description.clone(),
            priority: data.priority,
            assignee_id: data.assignee_id,
            position: data.position,
            created_at: now,
            updated_at: now,
        };
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        Ok(self.tasks.get(&id).map(|r| r.value().clone()))
    }

    async fn list_by_column(&self, column_id: Uuid) -> AppResult<Vec<Task>> {
        self.list_by_columns(&[column_id], &TaskFilter::default())
            .await
    }

    async fn list_by_columns(
        &self,
        column_ids: &[Uuid],
        filter: &TaskFilter,
    ) -> AppResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|r| column_ids.contains(&r.value().column_id) && filter.matches(r.value()))
            .map(|r| r.value().clone())
            .collect();
        tasks.sort_by(by_position);
        Ok(tasks)
    }

    async fn update(&self, id: Uuid, data: &UpdateTask) -> AppResult<Task> {
        let mut task = self
            .tasks
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Task {id} not found")))?;
        if let Some(title) = &data.title {
            task.title = title.clone();
        }
        if let Some(description) = &data.description {
            task.description = description.clone();
        }
        if let Some(priority) = data.priority {
            task.priority = priority;
        }
        if let Some(assignee_id) = data.assignee_id {
            task.assignee_id = assignee_id;
        }
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn move_to(&self, id: Uuid, column_id: Uuid, position: f64) -> AppResult<Task> {
        let mut task = self
            .tasks
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Task {id} not found")))?;
        task.column_id = column_id;
        task.position = position;
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.tasks.remove(&id).is_some())
    }

    async fn set_positions(&self, positions: &[(Uuid, f64)]) -> AppResult<()> {
        for (id, position) in positions {
            if let Some(mut task) = self.tasks.get_mut(id) {
                task.position = *position;
                task.updated_at = Utc::now();
            }
        }
        Ok(())
    }
}
