//! Route definitions for the Taskboard HTTP API.
//!
//! All routes are organized by resource and mounted under `/api/v1`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(project_routes())
        .merge(board_routes())
        .merge(task_routes())
        .merge(comment_routes())
        .merge(label_routes());

    let cors = build_cors_layer(&state.config.server);
    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Register, login, refresh, logout. No bearer token required.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
}

fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/me",
        get(handlers::user::get_profile).patch(handlers::user::update_profile),
    )
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            post(handlers::project::create_project).get(handlers::project::list_projects),
        )
        .route(
            "/projects/{id}",
            get(handlers::project::get_project)
                .patch(handlers::project::update_project)
                .delete(handlers::project::delete_project),
        )
        .route(
            "/projects/{id}/boards",
            post(handlers::board::create_board).get(handlers::board::list_boards),
        )
}

/// Boards, their columns, and column-scoped task creation.
fn board_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/boards/{id}",
            get(handlers::board::get_board)
                .patch(handlers::board::rename_board)
                .delete(handlers::board::delete_board),
        )
        .route(
            "/boards/{id}/columns",
            post(handlers::column::create_column).get(handlers::column::list_columns),
        )
        .route(
            "/boards/{id}/columns/renumber",
            post(handlers::column::renumber_columns),
        )
        .route(
            "/columns/{id}",
            patch(handlers::column::update_column).delete(handlers::column::delete_column),
        )
}

fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/columns/{id}/tasks", post(handlers::task::create_task))
        .route(
            "/columns/{id}/tasks/renumber",
            post(handlers::task::renumber_tasks),
        )
        .route("/boards/{id}/tasks", get(handlers::task::list_board_tasks))
        .route(
            "/boards/{id}/tasks/export",
            get(handlers::task::export_board_tasks),
        )
        .route(
            "/tasks/{id}",
            get(handlers::task::get_task)
                .patch(handlers::task::update_task)
                .delete(handlers::task::delete_task),
        )
        .route("/tasks/{id}/move", put(handlers::task::move_task))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks/{id}/comments",
            post(handlers::comment::create_comment).get(handlers::comment::list_comments),
        )
        .route(
            "/comments/{id}",
            patch(handlers::comment::update_comment).delete(handlers::comment::delete_comment),
        )
}

fn label_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{id}/labels",
            post(handlers::label::create_label).get(handlers::label::list_labels),
        )
        .route("/labels/{id}", delete(handlers::label::delete_label))
        .route(
            "/tasks/{id}/labels",
            post(handlers::label::attach_label).get(handlers::label::list_task_labels),
        )
        .route(
            "/tasks/{id}/labels/{label_id}",
            delete(handlers::label::detach_label),
        )
}
