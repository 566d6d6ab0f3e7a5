//! Storage traits, one per aggregate.
//!
//! Services hold these as `Arc<dyn …Store>` so the PostgreSQL
//! repositories and the in-memory stores are interchangeable.
//!
//! Conventions shared by every implementation:
//! - `find_*` returns `Ok(None)` for a missing row.
//! - `update*` fails with `NotFound` when no row matched.
//! - `delete` returns `Ok(false)` when no row matched.
//! - lists of positioned siblings are ordered by position, then creation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use taskboard_core::result::AppResult;
use taskboard_entity::board::{Board, Column, CreateBoard, CreateColumn, UpdateColumn};
use taskboard_entity::comment::{Comment, CreateComment};
use taskboard_entity::label::{CreateLabel, Label};
use taskboard_entity::project::{CreateProject, Project, UpdateProject};
use taskboard_entity::task::{CreateTask, Task, TaskFilter, UpdateTask};
use taskboard_entity::token::{CreateRefreshToken, RefreshToken};
use taskboard_entity::user::{CreateUser, User};

/// A project together with the board and columns created with it.
#[derive(Debug, Clone)]
pub struct ProjectBootstrap {
    pub project: Project,
    pub board: Board,
    pub columns: Vec<Column>,
}

#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Insert a user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn update_display_name(&self, id: Uuid, display_name: &str) -> AppResult<User>;
}

#[async_trait]
pub trait RefreshTokenStore: Send + Sync + 'static {
    async fn create(&self, data: &CreateRefreshToken) -> AppResult<RefreshToken>;

    /// Atomically delete and return the row for `token_hash`.
    ///
    /// Of any number of concurrent callers with the same hash, at most one
    /// receives `Some`.
    async fn take_by_hash(&self, token_hash: &str) -> AppResult<Option<RefreshToken>>;

    async fn delete_by_hash(&self, token_hash: &str) -> AppResult<bool>;

    /// Delete every token that expired before `now`. Returns the count.
    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}

#[async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    /// Insert a project, one board and its columns as a single unit.
    ///
    /// Either everything is persisted or nothing is.
    async fn create_with_board(
        &self,
        project: &CreateProject,
        board_name: &str,
        columns: &[(String, f64)],
    ) -> AppResult<ProjectBootstrap>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>>;

    /// Projects owned by `owner_id`, newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Project>>;

    async fn update(&self, id: Uuid, data: &UpdateProject) -> AppResult<Project>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

#[async_trait]
pub trait BoardStore: Send + Sync + 'static {
    async fn create(&self, data: &CreateBoard) -> AppResult<Board>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>>;

    /// Boards of a project, oldest first.
    async fn list_by_project(&self, project_id: Uuid) -> AppResult<Vec<Board>>;

    async fn rename(&self, id: Uuid, name: &str) -> AppResult<Board>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

#[async_trait]
pub trait ColumnStore: Send + Sync + 'static {
    async fn create(&self, data: &CreateColumn) -> AppResult<Column>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Column>>;

    async fn list_by_board(&self, board_id: Uuid) -> AppResult<Vec<Column>>;

    async fn update(&self, id: Uuid, data: &UpdateColumn) -> AppResult<Column>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Overwrite many positions at once.
    async fn set_positions(&self, positions: &[(Uuid, f64)]) -> AppResult<()>;
}

#[async_trait]
pub trait TaskStore: Send + Sync + 'static {
    async fn create(&self, data: &CreateTask) -> AppResult<Task>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>>;

    async fn list_by_column(&self, column_id: Uuid) -> AppResult<Vec<Task>>;

    /// Tasks in any of `column_ids` that satisfy `filter`.
    async fn list_by_columns(&self, column_ids: &[Uuid], filter: &TaskFilter)
    -> AppResult<Vec<Task>>;

    async fn update(&self, id: Uuid, data: &UpdateTask) -> AppResult<Task>;

    /// Re-parent and reposition a task. The position is stored as given.
    async fn move_to(&self, id: Uuid, column_id: Uuid, position: f64) -> AppResult<Task>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Overwrite many positions at once.
    async fn set_positions(&self, positions: &[(Uuid, f64)]) -> AppResult<()>;
}

#[async_trait]
pub trait LabelStore: Send + Sync + 'static {
    async fn create(&self, data: &CreateLabel) -> AppResult<Label>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Label>>;

    /// Labels of a project, by name.
    async fn list_by_project(&self, project_id: Uuid) -> AppResult<Vec<Label>>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Associate a label with a task. Repeating an association is a no-op.
    async fn attach(&self, task_id: Uuid, label_id: Uuid) -> AppResult<()>;

    async fn detach(&self, task_id: Uuid, label_id: Uuid) -> AppResult<bool>;

    async fn list_by_task(&self, task_id: Uuid) -> AppResult<Vec<Label>>;
}

#[async_trait]
pub trait CommentStore: Send + Sync + 'static {
    async fn create(&self, data: &CreateComment) -> AppResult<Comment>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Comment>>;

    /// Comments of a task, oldest first.
    async fn list_by_task(&self, task_id: Uuid) -> AppResult<Vec<Comment>>;

    async fn update_content(&self, id: Uuid, content: &str) -> AppResult<Comment>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
