//! Comment handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use taskboard_entity::comment::Comment;

use crate::dto::request::CommentRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/tasks/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(task_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Comment>>), ApiError> {
    let comment = state
        .comment_service
        .create_comment(&auth, task_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment))))
}

/// GET /api/v1/tasks/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(task_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Comment>>>, ApiError> {
    let comments = state.comment_service.list_comments(&auth, task_id).await?;
    Ok(Json(ApiResponse::ok(comments)))
}

/// PATCH /api/v1/comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    let comment = state
        .comment_service
        .update_comment(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(comment)))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.comment_service.delete_comment(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
