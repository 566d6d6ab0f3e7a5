//! Column handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use taskboard_entity::board::Column;

use crate::dto::request::{CreateColumnRequest, UpdateColumnRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/boards/{id}/columns
pub async fn create_column(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(board_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateColumnRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Column>>), ApiError> {
    let column = state
        .board_service
        .create_column(&auth, board_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(column))))
}

/// GET /api/v1/boards/{id}/columns
pub async fn list_columns(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(board_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Column>>>, ApiError> {
    let columns = state.board_service.list_columns(&auth, board_id).await?;
    Ok(Json(ApiResponse::ok(columns)))
}

/// POST /api/v1/boards/{id}/columns/renumber
pub async fn renumber_columns(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(board_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Column>>>, ApiError> {
    let columns = state.board_service.renumber_columns(&auth, board_id).await?;
    Ok(Json(ApiResponse::ok(columns)))
}

/// PATCH /api/v1/columns/{id}
pub async fn update_column(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateColumnRequest>,
) -> Result<Json<ApiResponse<Column>>, ApiError> {
    let column = state
        .board_service
        .update_column(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(column)))
}

/// DELETE /api/v1/columns/{id}
pub async fn delete_column(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.board_service.delete_column(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
