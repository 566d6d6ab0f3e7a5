use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_core::result::AppResult;
use taskboard_entity::comment::{Comment, CreateComment};

use crate::store::CommentStore;

#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: DashMap<Uuid, Comment>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            task_id: data.task_id,
            author_id: data.author_id,
            content: data.content.clone(),
            created_at: now,
            updated_at: now,
        };
        self.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Comment>> {
        Ok(self.comments.get(&id).map(|r| r.value().clone()))
    }

    async fn list_by_task(&self, task_id: Uuid) -> AppResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|r| r.value().task_id == task_id)
            .map(|r| r.value().clone())
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn update_content(&self, id: Uuid, content: &str) -> AppResult<Comment> {
        let mut comment = self
            .comments
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))?;
        comment.content = content.to_string();
        comment.updated_at = Utc::now();
        Ok(comment.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.comments.remove(&id).is_some())
    }
}
