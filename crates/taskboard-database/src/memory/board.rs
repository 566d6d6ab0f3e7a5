use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_core::result::AppResult;
use taskboard_entity::board::{Board, CreateBoard};

use crate::store::BoardStore;

#[derive(Debug, Default)]
pub struct MemoryBoardStore {
    boards: DashMap<Uuid, Board>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn create(&self, data: &CreateBoard) -> AppResult<Board> {
        let now = Utc::now();
        let board = Board {
            id: Uuid::new_v4(),
            project_id: data.project_id,
            name: data.name.clone(),
            created_at: now,
            updated_at: now,
        };
        self.boards.insert(board.id, board.clone());
        Ok(board)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>> {
        Ok(self.boards.get(&id).map(|r| r.value().clone()))
    }

    async fn list_by_project(&self, project_id: Uuid) -> AppResult<Vec<Board>> {
        let mut boards: Vec<Board> = self
            .boards
            .iter()
            .filter(|r| r.value().project_id == project_id)
            .map(|r| r.value().clone())
            .collect();
        boards.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(boards)
    }

    async fn rename(&self, id: Uuid, name: &str) -> AppResult<Board> {
        let mut board = self
            .boards
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Board {id} not found")))?;
        board.name = name.to_string();
        board.updated_at = Utc::now();
        Ok(board.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.boards.remove(&id).is_some())
    }
}
