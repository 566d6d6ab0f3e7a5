//! Application builder: wires stores, services and state into an Axum app.

use std::sync::Arc;

use axum::Router;

use taskboard_auth::AuthService;
use taskboard_core::config::AppConfig;
use taskboard_core::error::AppError;
use taskboard_database::DatabasePool;
use taskboard_database::memory::MemoryStores;
use taskboard_database::repositories::{
    BoardRepository, ColumnRepository, CommentRepository, LabelRepository, ProjectRepository,
    RefreshTokenRepository, TaskRepository, UserRepository,
};
use taskboard_database::{
    BoardStore, ColumnStore, CommentStore, LabelStore, ProjectStore, RefreshTokenStore,
    TaskStore, UserStore,
};
use taskboard_service::{
    BoardService, CommentService, LabelService, OwnershipResolver, ProjectService, TaskService,
    UserService,
};

use crate::router::build_router;
use crate::state::AppState;

/// One implementation of every store trait.
#[derive(Clone)]
pub struct StoreSet {
    pub users: Arc<dyn UserStore>,
    pub refresh_tokens: Arc<dyn RefreshTokenStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub boards: Arc<dyn BoardStore>,
    pub columns: Arc<dyn ColumnStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub labels: Arc<dyn LabelStore>,
    pub comments: Arc<dyn CommentStore>,
}

impl StoreSet {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(db: &DatabasePool) -> Self {
        let pool = db.pool();
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            refresh_tokens: Arc::new(RefreshTokenRepository::new(pool.clone())),
            projects: Arc::new(ProjectRepository::new(pool.clone())),
            boards: Arc::new(BoardRepository::new(pool.clone())),
            columns: Arc::new(ColumnRepository::new(pool.clone())),
            tasks: Arc::new(TaskRepository::new(pool.clone())),
            labels: Arc::new(LabelRepository::new(pool.clone())),
            comments: Arc::new(CommentRepository::new(pool.clone())),
        }
    }

    /// Views over in-memory stores.
    pub fn memory(stores: &MemoryStores) -> Self {
        Self {
            users: stores.users.clone(),
            refresh_tokens: stores.refresh_tokens.clone(),
            projects: stores.projects.clone(),
            boards: stores.boards.clone(),
            columns: stores.columns.clone(),
            tasks: stores.tasks.clone(),
            labels: stores.labels.clone(),
            comments: stores.comments.clone(),
        }
    }
}

impl AppState {
    /// Builds every service over `stores`.
    ///
    /// Fails when the auth configuration is unusable.
    pub fn new(
        config: AppConfig,
        stores: StoreSet,
        db: Option<DatabasePool>,
    ) -> Result<Self, AppError> {
        let auth_service = AuthService::new(
            &config.auth,
            stores.users.clone(),
            stores.refresh_tokens.clone(),
        )?;

        let resolver = Arc::new(OwnershipResolver::new(
            stores.projects.clone(),
            stores.boards.clone(),
            stores.columns.clone(),
            stores.tasks.clone(),
            stores.labels.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            auth_service: Arc::new(auth_service),
            user_service: Arc::new(UserService::new(stores.users.clone())),
            project_service: Arc::new(ProjectService::new(
                stores.projects.clone(),
                resolver.clone(),
            )),
            board_service: Arc::new(BoardService::new(
                stores.boards.clone(),
                stores.columns.clone(),
                resolver.clone(),
            )),
            task_service: Arc::new(TaskService::new(
                stores.tasks.clone(),
                stores.columns.clone(),
                stores.users.clone(),
                resolver.clone(),
            )),
            label_service: Arc::new(LabelService::new(stores.labels.clone(), resolver.clone())),
            comment_service: Arc::new(CommentService::new(stores.comments, resolver)),
        })
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
