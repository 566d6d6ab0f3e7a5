//! Label handlers, for projects and task tagging.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use taskboard_entity::label::Label;

use crate::dto::request::{AttachLabelRequest, CreateLabelRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/projects/{id}/labels
pub async fn create_label(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateLabelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Label>>), ApiError> {
    let label = state
        .label_service
        .create_label(&auth, project_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(label))))
}

/// GET /api/v1/projects/{id}/labels
pub async fn list_labels(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Label>>>, ApiError> {
    let labels = state.label_service.list_labels(&auth, project_id).await?;
    Ok(Json(ApiResponse::ok(labels)))
}

/// DELETE /api/v1/labels/{id}
pub async fn delete_label(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.label_service.delete_label(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/tasks/{id}/labels
pub async fn attach_label(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(task_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<AttachLabelRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .label_service
        .attach_label(&auth, task_id, req.label_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/tasks/{id}/labels
pub async fn list_task_labels(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(task_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Label>>>, ApiError> {
    let labels = state.label_service.list_task_labels(&auth, task_id).await?;
    Ok(Json(ApiResponse::ok(labels)))
}

/// DELETE /api/v1/tasks/{id}/labels/{label_id}
pub async fn detach_label(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath((task_id, label_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .label_service
        .detach_label(&auth, task_id, label_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
