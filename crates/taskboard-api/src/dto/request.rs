//! Request DTOs with validation.
//!
//! Length limits are checked here; domain rules (required fields,
//! priority values, password policy) are checked by the services.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use taskboard_auth::RegisterInput;
use taskboard_core::error::AppError;
use taskboard_entity::task::{MoveTask, TaskFilter, TaskPriority};
use taskboard_service::board::{
    CreateBoardRequest as SvcCreateBoard, CreateColumnRequest as SvcCreateColumn,
    UpdateBoardRequest as SvcUpdateBoard, UpdateColumnRequest as SvcUpdateColumn,
};
use taskboard_service::comment::{
    CreateCommentRequest as SvcCreateComment, UpdateCommentRequest as SvcUpdateComment,
};
use taskboard_service::label::CreateLabelRequest as SvcCreateLabel;
use taskboard_service::project::{
    CreateProjectRequest as SvcCreateProject, UpdateProjectRequest as SvcUpdateProject,
};
use taskboard_service::task::{
    CreateTaskRequest as SvcCreateTask, UpdateTaskRequest as SvcUpdateTask, present,
};
use taskboard_service::user::UpdateProfileRequest as SvcUpdateProfile;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 255, message = "email is too long"))]
    #[serde(default)]
    pub email: String,
    #[validate(length(max = 100, message = "display_name is too long"))]
    #[serde(default)]
    pub display_name: String,
    #[validate(length(max = 128, message = "password is too long"))]
    #[serde(default)]
    pub password: String,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            display_name: req.display_name,
            password: req.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Body of refresh and logout.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "refresh_token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub display_name: String,
}

impl From<UpdateProfileRequest> for SvcUpdateProfile {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            display_name: req.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(max = 200))]
    pub name: String,
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub description: String,
}

impl From<CreateProjectRequest> for SvcCreateProject {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

impl From<UpdateProjectRequest> for SvcUpdateProject {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Create or rename a board.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BoardNameRequest {
    #[validate(length(max = 200))]
    pub name: String,
}

impl From<BoardNameRequest> for SvcCreateBoard {
    fn from(req: BoardNameRequest) -> Self {
        Self { name: req.name }
    }
}

impl From<BoardNameRequest> for SvcUpdateBoard {
    fn from(req: BoardNameRequest) -> Self {
        Self { name: req.name }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateColumnRequest {
    #[validate(length(max = 100))]
    pub name: String,
}

impl From<CreateColumnRequest> for SvcCreateColumn {
    fn from(req: CreateColumnRequest) -> Self {
        Self { name: req.name }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateColumnRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub position: Option<f64>,
}

impl From<UpdateColumnRequest> for SvcUpdateColumn {
    fn from(req: UpdateColumnRequest) -> Self {
        Self {
            name: req.name,
            position: req.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(max = 500))]
    pub title: String,
    #[validate(length(max = 10000))]
    #[serde(default)]
    pub description: String,
    pub priority: Option<String>,
    pub assignee_id: Option<Uuid>,
}

impl From<CreateTaskRequest> for SvcCreateTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            priority: req.priority,
            assignee_id: req.assignee_id,
        }
    }
}

/// Partial task update. `"assignee_id": null` unassigns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(max = 500))]
    pub title: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub assignee_id: Option<Option<Uuid>>,
}

impl From<UpdateTaskRequest> for SvcUpdateTask {
    fn from(req: UpdateTaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            priority: req.priority,
            assignee_id: req.assignee_id,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct MoveTaskRequest {
    pub column_id: Uuid,
    pub position: f64,
}

impl From<MoveTaskRequest> for MoveTask {
    fn from(req: MoveTaskRequest) -> Self {
        Self {
            column_id: req.column_id,
            position: req.position,
        }
    }
}

/// Query string of `GET /boards/{id}/tasks`.
///
/// Kept as raw strings so a bad value yields a validation envelope
/// instead of a bare extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListQuery {
    pub column_id: Option<String>,
    pub priority: Option<String>,
    pub assignee_id: Option<String>,
}

fn parse_uuid_param(name: &str, raw: Option<&str>) -> Result<Option<Uuid>, AppError> {
    raw.filter(|s| !s.is_empty())
        .map(|s| {
            Uuid::parse_str(s).map_err(|_| AppError::validation(format!("invalid {name}: {s}")))
        })
        .transpose()
}

impl TryFrom<TaskListQuery> for TaskFilter {
    type Error = AppError;

    fn try_from(query: TaskListQuery) -> Result<Self, Self::Error> {
        let priority = query
            .priority
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::parse::<TaskPriority>)
            .transpose()?;

        Ok(Self {
            column_id: parse_uuid_param("column_id", query.column_id.as_deref())?,
            priority,
            assignee_id: parse_uuid_param("assignee_id", query.assignee_id.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(max = 10000))]
    pub content: String,
}

impl From<CommentRequest> for SvcCreateComment {
    fn from(req: CommentRequest) -> Self {
        Self {
            content: req.content,
        }
    }
}

impl From<CommentRequest> for SvcUpdateComment {
    fn from(req: CommentRequest) -> Self {
        Self {
            content: req.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLabelRequest {
    #[validate(length(max = 50))]
    pub name: String,
    #[validate(length(max = 7))]
    pub color: Option<String>,
}

impl From<CreateLabelRequest> for SvcCreateLabel {
    fn from(req: CreateLabelRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct AttachLabelRequest {
    pub label_id: Uuid,
}
