//! Board handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use taskboard_entity::board::Board;

use crate::dto::request::BoardNameRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/projects/{id}/boards
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<BoardNameRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Board>>), ApiError> {
    let board = state
        .board_service
        .create_board(&auth, project_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(board))))
}

/// GET /api/v1/projects/{id}/boards
pub async fn list_boards(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(project_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Board>>>, ApiError> {
    let boards = state.board_service.list_boards(&auth, project_id).await?;
    Ok(Json(ApiResponse::ok(boards)))
}

/// GET /api/v1/boards/{id}
pub async fn get_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Board>>, ApiError> {
    let board = state.board_service.get_board(&auth, id).await?;
    Ok(Json(ApiResponse::ok(board)))
}

/// PATCH /api/v1/boards/{id}
pub async fn rename_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<BoardNameRequest>,
) -> Result<Json<ApiResponse<Board>>, ApiError> {
    let board = state
        .board_service
        .rename_board(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(board)))
}

/// DELETE /api/v1/boards/{id}
pub async fn delete_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.board_service.delete_board(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
