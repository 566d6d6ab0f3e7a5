//! Comment operations.
//!
//! Reading and posting require access to the task. Editing and deleting
//! are reserved to the comment's author.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::CommentStore;
use taskboard_entity::comment::{Comment, CreateComment};

use crate::context::RequestContext;
use crate::ownership::OwnershipResolver;

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    resolver: Arc<OwnershipResolver>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

fn required_content(content: &str) -> Result<&str, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::validation("content is required"));
    }
    Ok(content)
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comments: Arc<dyn CommentStore>, resolver: Arc<OwnershipResolver>) -> Self {
        Self { comments, resolver }
    }

    pub async fn create_comment(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        req: CreateCommentRequest,
    ) -> Result<Comment, AppError> {
        let content = required_content(&req.content)?;
        self.resolver.authorize_task(task_id, ctx.user_id).await?;

        let comment = self
            .comments
            .create(&CreateComment {
                task_id,
                author_id: ctx.user_id,
                content: content.to_string(),
            })
            .await?;

        info!(task_id = %task_id, comment_id = %comment.id, "Comment added");
        Ok(comment)
    }

    /// Comments on a task, oldest first.
    pub async fn list_comments(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
    ) -> Result<Vec<Comment>, AppError> {
        self.resolver.authorize_task(task_id, ctx.user_id).await?;
        self.comments.list_by_task(task_id).await
    }

    async fn authored_comment(
        &self,
        ctx: &RequestContext,
        comment_id: Uuid,
    ) -> Result<Comment, AppError> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment {comment_id} not found")))?;

        if !comment.is_authored_by(ctx.user_id) {
            warn!(
                comment_id = %comment_id,
                user_id = %ctx.user_id,
                "Comment edit by non-author refused"
            );
            return Err(AppError::forbidden("Only the author can change this comment"));
        }
        Ok(comment)
    }

    pub async fn update_comment(
        &self,
        ctx: &RequestContext,
        comment_id: Uuid,
        req: UpdateCommentRequest,
    ) -> Result<Comment, AppError> {
        let content = required_content(&req.content)?;
        self.authored_comment(ctx, comment_id).await?;
        self.comments.update_content(comment_id, content).await
    }

    pub async fn delete_comment(
        &self,
        ctx: &RequestContext,
        comment_id: Uuid,
    ) -> Result<(), AppError> {
        self.authored_comment(ctx, comment_id).await?;

        if !self.comments.delete(comment_id).await? {
            return Err(AppError::not_found(format!(
                "Comment {comment_id} not found"
            )));
        }

        info!(user_id = %ctx.user_id, comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}
