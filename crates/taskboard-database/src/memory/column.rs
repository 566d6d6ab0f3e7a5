use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_core::result::AppResult;
use taskboard_entity::board::{Column, CreateColumn, UpdateColumn};

use super::by_position;
use crate::store::ColumnStore;

#[derive(Debug, Default)]
pub struct MemoryColumnStore {
    columns: DashMap<Uuid, Column>,
}

impl MemoryColumnStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ColumnStore for MemoryColumnStore {
    async fn create(&self, data: &CreateColumn) -> AppResult<Column> {
        let now = Utc::now();
        let column = Column {
            id: Uuid::new_v4(),
            board_id: data.board_id,
            name: data.name.clone(),
            position: data.position,
            created_at: now,
            updated_at: now,
        };
        self.columns.insert(column.id, column.clone());
        Ok(column)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Column>> {
        Ok(self.columns.get(&id).map(|r| r.value().clone()))
    }

    async fn list_by_board(&self, board_id: Uuid) -> AppResult<Vec<Column>> {
        let mut columns: Vec<Column> = self
            .columns
            .iter()
            .filter(|r| r.value().board_id == board_id)
            .map(|r| r.value().clone())
            .collect();
        columns.sort_by(by_position);
        Ok(columns)
    }

    async fn update(&self, id: Uuid, data: &UpdateColumn) -> AppResult<Column> {
        let mut column = self
            .columns
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Column {id} not found")))?;
        if let Some(name) = &data.name {
            column.name = name.clone();
        }
        if let Some(position) = data.position {
            column.position = position;
        }
        column.updated_at = Utc::now();
        Ok(column.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.columns.remove(&id).is_some())
    }

    async fn set_positions(&self, positions: &[(Uuid, f64)]) -> AppResult<()> {
        for (id, position) in positions {
            if let Some(mut column) = self.columns.get_mut(id) {
                column.position = *position;
                column.updated_at = Utc::now();
            }
        }
        Ok(())
    }
}
