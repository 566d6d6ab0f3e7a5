//! Task handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use uuid::Uuid;

use taskboard_entity::task::{Task, TaskFilter};

use crate::dto::request::{CreateTaskRequest, MoveTaskRequest, TaskListQuery, UpdateTaskRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/columns/{id}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(column_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Task>>), ApiError> {
    let task = state
        .task_service
        .create_task(&auth, column_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(task))))
}

/// POST /api/v1/columns/{id}/tasks/renumber
pub async fn renumber_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(column_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Task>>>, ApiError> {
    let tasks = state.task_service.renumber_tasks(&auth, column_id).await?;
    Ok(Json(ApiResponse::ok(tasks)))
}

/// GET /api/v1/boards/{id}/tasks?column_id=&priority=&assignee_id=
pub async fn list_board_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(board_id): ApiPath<Uuid>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<ApiResponse<Vec<Task>>>, ApiError> {
    let filter = TaskFilter::try_from(query)?;
    let tasks = state
        .task_service
        .list_board_tasks(&auth, board_id, filter)
        .await?;
    Ok(Json(ApiResponse::ok(tasks)))
}

/// GET /api/v1/boards/{id}/tasks/export
pub async fn export_board_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(board_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let csv = state.task_service.export_board_csv(&auth, board_id).await?;
    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=tasks.csv"),
        ],
        csv,
    ))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state.task_service.get_task(&auth, id).await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// PATCH /api/v1/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateTaskRequest>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state
        .task_service
        .update_task(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// PUT /api/v1/tasks/{id}/move
pub async fn move_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<MoveTaskRequest>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state.task_service.move_task(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.task_service.delete_task(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
