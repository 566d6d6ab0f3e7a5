//! Project handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use taskboard_entity::project::Project;

use crate::dto::request::{CreateProjectRequest, UpdateProjectRequest};
use crate::dto::response::{ApiResponse, ProjectCreatedResponse};
use crate::error::ApiError;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProjectCreatedResponse>>), ApiError> {
    let created = state
        .project_service
        .create_project(&auth, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created.into()))))
}

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let projects = state.project_service.list_projects(&auth).await?;
    Ok(Json(ApiResponse::ok(projects)))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state.project_service.get_project(&auth, id).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// PATCH /api/v1/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state
        .project_service
        .update_project(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.project_service.delete_project(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
