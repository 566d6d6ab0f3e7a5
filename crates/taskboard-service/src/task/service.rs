//! Task operations.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::{ColumnStore, TaskStore, UserStore};
use taskboard_entity::task::{CreateTask, MoveTask, Task, TaskFilter, TaskPriority, UpdateTask};

use crate::context::RequestContext;
use crate::ownership::OwnershipResolver;
use crate::position::PositionAllocator;
use crate::task::export::render_tasks_csv;

/// Manages tasks inside columns.
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
    columns: Arc<dyn ColumnStore>,
    users: Arc<dyn UserStore>,
    resolver: Arc<OwnershipResolver>,
}

/// Request to create a task. It is appended to the column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `low`, `medium` or `high`. Defaults to `medium`.
    pub priority: Option<String>,
    pub assignee_id: Option<Uuid>,
}

/// Partial task update.
///
/// `assignee_id` distinguishes an absent field (keep) from an explicit
/// `null` (unassign).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub assignee_id: Option<Option<Uuid>>,
}

/// Deserializes a present field, including `null`, as `Some`.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn parse_priority(raw: &str) -> Result<TaskPriority, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation("priority must be low, medium, or high"))
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(
        tasks: Arc<dyn TaskStore>,
        columns: Arc<dyn ColumnStore>,
        users: Arc<dyn UserStore>,
        resolver: Arc<OwnershipResolver>,
    ) -> Self {
        Self {
            tasks,
            columns,
            users,
            resolver,
        }
    }

    async fn ensure_assignee_exists(&self, assignee_id: Uuid) -> Result<(), AppError> {
        if self.users.find_by_id(assignee_id).await?.is_none() {
            return Err(AppError::validation(format!(
                "assignee {assignee_id} does not exist"
            )));
        }
        Ok(())
    }

    /// Creates a task at the end of a column.
    pub async fn create_task(
        &self,
        ctx: &RequestContext,
        column_id: Uuid,
        req: CreateTaskRequest,
    ) -> Result<Task, AppError> {
        let title = req.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("title is required"));
        }
        let priority = match req.priority.as_deref() {
            Some(raw) => parse_priority(raw)?,
            None => TaskPriority::default(),
        };

        self.resolver
            .authorize_column(column_id, ctx.user_id)
            .await?;
        if let Some(assignee_id) = req.assignee_id {
            self.ensure_assignee_exists(assignee_id).await?;
        }

        let siblings = self.tasks.list_by_column(column_id).await?;
        let position = PositionAllocator::append_position(&siblings);

        let task = self
            .tasks
            .create(&CreateTask {
                column_id,
                title: title.to_string(),
                description: req.description,
                priority,
                assignee_id: req.assignee_id,
                position,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            column_id = %column_id,
            task_id = %task.id,
            position,
            "Task created"
        );
        Ok(task)
    }

    pub async fn get_task(&self, ctx: &RequestContext, task_id: Uuid) -> Result<Task, AppError> {
        self.resolver.authorize_task(task_id, ctx.user_id).await
    }

    /// Tasks on a board matching `filter`, ordered by position then
    /// creation time across the whole board.
    pub async fn list_board_tasks(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
        filter: TaskFilter,
    ) -> Result<Vec<Task>, AppError> {
        self.resolver.authorize_board(board_id, ctx.user_id).await?;

        let column_ids: Vec<Uuid> = self
            .columns
            .list_by_board(board_id)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        if column_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.tasks.list_by_columns(&column_ids, &filter).await
    }

    pub async fn update_task(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        req: UpdateTaskRequest,
    ) -> Result<Task, AppError> {
        let title = match req.title {
            Some(title) if title.trim().is_empty() => {
                return Err(AppError::validation("title cannot be empty"));
            }
            Some(title) => Some(title.trim().to_string()),
            None => None,
        };
        let priority = req.priority.as_deref().map(parse_priority).transpose()?;

        self.resolver.authorize_task(task_id, ctx.user_id).await?;
        if let Some(Some(assignee_id)) = req.assignee_id {
            self.ensure_assignee_exists(assignee_id).await?;
        }

        let task = self
            .tasks
            .update(
                task_id,
                &UpdateTask {
                    title,
                    description: req.description,
                    priority,
                    assignee_id: req.assignee_id,
                },
            )
            .await?;

        debug!(task_id = %task_id, "Task updated");
        Ok(task)
    }

    /// Moves a task into `column_id` at exactly the given position.
    ///
    /// Both the task and the destination column must belong to the
    /// caller. Neighbouring tasks are never touched.
    pub async fn move_task(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        req: MoveTask,
    ) -> Result<Task, AppError> {
        let task = self.resolver.authorize_task(task_id, ctx.user_id).await?;
        self.resolver
            .authorize_column(req.column_id, ctx.user_id)
            .await?;

        let moved = self
            .tasks
            .move_to(task_id, req.column_id, req.position)
            .await?;

        info!(
            task_id = %task_id,
            from_column = %task.column_id,
            to_column = %req.column_id,
            position = req.position,
            "Task moved"
        );
        Ok(moved)
    }

    pub async fn delete_task(&self, ctx: &RequestContext, task_id: Uuid) -> Result<(), AppError> {
        self.resolver.authorize_task(task_id, ctx.user_id).await?;

        if !self.tasks.delete(task_id).await? {
            return Err(AppError::not_found(format!("Task {task_id} not found")));
        }

        info!(user_id = %ctx.user_id, task_id = %task_id, "Task deleted");
        Ok(())
    }

    /// All tasks on a board rendered as CSV.
    pub async fn export_board_csv(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
    ) -> Result<String, AppError> {
        self.resolver.authorize_board(board_id, ctx.user_id).await?;

        let columns = self.columns.list_by_board(board_id).await?;
        let column_ids: Vec<Uuid> = columns.iter().map(|c| c.id).collect();
        let tasks = if column_ids.is_empty() {
            Vec::new()
        } else {
            self.tasks
                .list_by_columns(&column_ids, &TaskFilter::default())
                .await?
        };

        debug!(board_id = %board_id, rows = tasks.len(), "Board exported");
        Ok(render_tasks_csv(&columns, &tasks))
    }

    /// Rewrites task positions in a column to 1000, 2000, ... keeping order.
    pub async fn renumber_tasks(
        &self,
        ctx: &RequestContext,
        column_id: Uuid,
    ) -> Result<Vec<Task>, AppError> {
        self.resolver
            .authorize_column(column_id, ctx.user_id)
            .await?;

        let tasks = self.tasks.list_by_column(column_id).await?;
        let positions = PositionAllocator::renumber(&tasks);
        self.tasks.set_positions(&positions).await?;

        info!(
            column_id = %column_id,
            count = positions.len(),
            "Tasks renumbered"
        );
        self.tasks.list_by_column(column_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;
    use taskboard_core::ErrorKind;

    fn titled(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: String::new(),
            priority: None,
            assignee_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_appends_with_defaults() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();

        let task = service
            .create_task(&ctx, seeded.task.column_id, titled("Second"))
            .await
            .unwrap();
        assert_eq!(task.position, 2000.0);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(task.assignee_id.is_none());

        let empty_column = seeded.columns[1].id;
        let task = service
            .create_task(&ctx, empty_column, titled("Alone"))
            .await
            .unwrap();
        assert_eq!(task.position, 1000.0);
    }

    #[tokio::test]
    async fn test_create_validates_input() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();
        let column = seeded.task.column_id;

        let err = service
            .create_task(&ctx, column, titled("  "))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = service
            .create_task(
                &ctx,
                column,
                CreateTaskRequest {
                    priority: Some("urgent".into()),
                    ..titled("T")
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "priority must be low, medium, or high");

        let err = service
            .create_task(
                &ctx,
                column,
                CreateTaskRequest {
                    assignee_id: Some(Uuid::new_v4()),
                    ..titled("T")
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_move_stores_position_verbatim() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();
        let target = seeded.columns[2].id;

        let moved = service
            .move_task(
                &ctx,
                seeded.task.id,
                MoveTask {
                    column_id: target,
                    position: 1500.5,
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.column_id, target);
        assert_eq!(moved.position, 1500.5);

        // Colliding positions are accepted as-is.
        let other = service.create_task(&ctx, target, titled("B")).await.unwrap();
        let moved = service
            .move_task(
                &ctx,
                other.id,
                MoveTask {
                    column_id: target,
                    position: 1500.5,
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.position, 1500.5);
    }

    #[tokio::test]
    async fn test_move_into_foreign_column_is_forbidden() {
        let fx = Fixture::new();
        let alice = fx.context().await;
        let bob = fx.context().await;
        let mine = fx.project_with_task(alice.user_id).await;
        let theirs = fx.project_with_task(bob.user_id).await;
        let service = fx.task_service();

        let err = service
            .move_task(
                &alice,
                mine.task.id,
                MoveTask {
                    column_id: theirs.columns[0].id,
                    position: 10.0,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let err = service
            .move_task(
                &bob,
                mine.task.id,
                MoveTask {
                    column_id: theirs.columns[0].id,
                    position: 10.0,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let unchanged = service.get_task(&alice, mine.task.id).await.unwrap();
        assert_eq!(unchanged.column_id, mine.task.column_id);
    }

    #[tokio::test]
    async fn test_update_sets_and_clears_assignee() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();

        let updated = service
            .update_task(
                &ctx,
                seeded.task.id,
                UpdateTaskRequest {
                    priority: Some("high".into()),
                    assignee_id: Some(Some(ctx.user_id)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.priority, TaskPriority::High);
        assert_eq!(updated.assignee_id, Some(ctx.user_id));
        assert_eq!(updated.title, "First");

        let updated = service
            .update_task(
                &ctx,
                seeded.task.id,
                UpdateTaskRequest {
                    title: Some("Renamed".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.assignee_id, Some(ctx.user_id));

        let updated = service
            .update_task(
                &ctx,
                seeded.task.id,
                UpdateTaskRequest {
                    assignee_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.assignee_id.is_none());
        assert_eq!(updated.title, "Renamed");
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let absent: UpdateTaskRequest = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(absent.assignee_id, None);

        let cleared: UpdateTaskRequest = serde_json::from_str(r#"{"assignee_id":null}"#).unwrap();
        assert_eq!(cleared.assignee_id, Some(None));

        let id = Uuid::new_v4();
        let set: UpdateTaskRequest =
            serde_json::from_str(&format!(r#"{{"assignee_id":"{id}"}}"#)).unwrap();
        assert_eq!(set.assignee_id, Some(Some(id)));
    }

    #[tokio::test]
    async fn test_list_board_tasks_with_filter() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();

        service
            .create_task(
                &ctx,
                seeded.columns[1].id,
                CreateTaskRequest {
                    priority: Some("high".into()),
                    assignee_id: Some(ctx.user_id),
                    ..titled("Urgent")
                },
            )
            .await
            .unwrap();

        let all = service
            .list_board_tasks(&ctx, seeded.board.id, TaskFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let high = service
            .list_board_tasks(
                &ctx,
                seeded.board.id,
                TaskFilter {
                    priority: Some(TaskPriority::High),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].title, "Urgent");

        let mine = service
            .list_board_tasks(
                &ctx,
                seeded.board.id,
                TaskFilter {
                    assignee_id: Some(ctx.user_id),
                    column_id: Some(seeded.columns[0].id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(mine.is_empty());
    }

    #[tokio::test]
    async fn test_list_board_tasks_orders_by_position_across_columns() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();

        service
            .create_task(&ctx, seeded.columns[2].id, titled("Done early"))
            .await
            .unwrap();
        service
            .move_task(
                &ctx,
                seeded.task.id,
                MoveTask {
                    column_id: seeded.columns[0].id,
                    position: 1500.0,
                },
            )
            .await
            .unwrap();
        let doing = service
            .create_task(&ctx, seeded.columns[1].id, titled("Doing"))
            .await
            .unwrap();
        service
            .move_task(
                &ctx,
                doing.id,
                MoveTask {
                    column_id: seeded.columns[1].id,
                    position: 1200.0,
                },
            )
            .await
            .unwrap();

        let titles: Vec<String> = service
            .list_board_tasks(&ctx, seeded.board.id, TaskFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Done early", "Doing", "First"]);
    }

    #[tokio::test]
    async fn test_renumber_tasks() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();
        let column = seeded.task.column_id;

        let second = service.create_task(&ctx, column, titled("Second")).await.unwrap();
        service
            .move_task(
                &ctx,
                second.id,
                MoveTask {
                    column_id: column,
                    position: 500.0,
                },
            )
            .await
            .unwrap();

        let tasks = service.renumber_tasks(&ctx, column).await.unwrap();
        let layout: Vec<(&str, f64)> = tasks
            .iter()
            .map(|t| (t.title.as_str(), t.position))
            .collect();
        assert_eq!(layout, vec![("Second", 1000.0), ("First", 2000.0)]);
    }

    #[tokio::test]
    async fn test_export_board_csv() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let stranger = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();

        let csv = service.export_board_csv(&ctx, seeded.board.id).await.unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("First,,medium,To Do,"));

        let err = service
            .export_board_csv(&stranger, seeded.board.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_delete_task() {
        let fx = Fixture::new();
        let ctx = fx.context().await;
        let stranger = fx.context().await;
        let seeded = fx.project_with_task(ctx.user_id).await;
        let service = fx.task_service();

        let err = service
            .delete_task(&stranger, seeded.task.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        service.delete_task(&ctx, seeded.task.id).await.unwrap();
        let err = service.get_task(&ctx, seeded.task.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
