use async_trait::async_trait;
use chrono::Utc;
use dashmap::{DashMap, DashSet};
use uuid::Uuid;

use taskboard_core::result::AppResult;
use taskboard_entity::label::{CreateLabel, Label};

use crate::store::LabelStore;

#[derive(Debug, Default)]
pub struct MemoryLabelStore {
    labels: DashMap<Uuid, Label>,
    /// (task ID, label ID) associations.
    task_labels: DashSet<(Uuid, Uuid)>,
}

impl MemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_by_name(labels: &mut [Label]) {
    labels.sort_by(|a, b| a.name.cmp(&b.name));
}

#[async_trait]
impl LabelStore for MemoryLabelStore {
    async fn create(&self, data: &CreateLabel) -> AppResult<Label> {
        let label = Label {
            id: Uuid::new_v4(),
            project_id: data.project_id,
            name: data.name.clone(),
            color: data.color.clone(),
            created_at: Utc::now(),
        };
        self.labels.insert(label.id, label.clone());
        Ok(label)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Label>> {
        Ok(self.labels.get(&id).map(|r| r.value().clone()))
    }

    async fn list_by_project(&self, project_id: Uuid) -> AppResult<Vec<Label>> {
        let mut labels: Vec<Label> = self
            .labels
            .iter()
            .filter(|r| r.value().project_id == project_id)
            .map(|r| r.value().clone())
            .collect();
        sort_by_name(&mut labels);
        Ok(labels)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.labels.remove(&id).is_some();
        if removed {
            self.task_labels.retain(|(_, label_id)| *label_id != id);
        }
        Ok(removed)
    }

    async fn attach(&self, task_id: Uuid, label_id: Uuid) -> AppResult<()> {
        self.task_labels.insert((task_id, label_id));
        Ok(())
    }

    async fn detach(&self, task_id: Uuid, label_id: Uuid) -> AppResult<bool> {
        Ok(self.task_labels.remove(&(task_id, label_id)).is_some())
    }

    async fn list_by_task(&self, task_id: Uuid) -> AppResult<Vec<Label>> {
        let label_ids: Vec<Uuid> = self
            .task_labels
            .iter()
            .filter(|pair| pair.0 == task_id)
            .map(|pair| pair.1)
            .collect();

        let mut labels: Vec<Label> = label_ids
            .iter()
            .filter_map(|id| self.labels.get(id).map(|r| r.value().clone()))
            .collect();
        sort_by_name(&mut labels);
        Ok(labels)
    }
}
