//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use taskboard_auth::AuthService;
use taskboard_core::config::AppConfig;
use taskboard_database::DatabasePool;
use taskboard_service::{
    BoardService, CommentService, LabelService, ProjectService, TaskService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Absent when running on in-memory stores.
    pub db: Option<DatabasePool>,

    // ── Auth ─────────────────────────────────────────────────
    pub auth_service: Arc<AuthService>,

    // ── Domain services ──────────────────────────────────────
    pub user_service: Arc<UserService>,
    pub project_service: Arc<ProjectService>,
    pub board_service: Arc<BoardService>,
    pub task_service: Arc<TaskService>,
    pub label_service: Arc<LabelService>,
    pub comment_service: Arc<CommentService>,
}
