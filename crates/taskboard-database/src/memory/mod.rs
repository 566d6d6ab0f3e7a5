//! In-memory store implementations backed by [`dashmap`].
//!
//! Used by tests across the workspace. They honor the same contracts as
//! the PostgreSQL repositories (uniqueness, atomic redemption, ordering)
//! but do not cascade deletes: removing a parent leaves its children in
//! place with a dangling reference.

mod board;
mod column;
mod comment;
mod label;
mod project;
mod refresh_token;
mod task;
mod user;

use std::cmp::Ordering;
use std::sync::Arc;

use taskboard_entity::Positioned;

pub use board::MemoryBoardStore;
pub use column::MemoryColumnStore;
pub use comment::MemoryCommentStore;
pub use label::MemoryLabelStore;
pub use project::MemoryProjectStore;
pub use refresh_token::MemoryRefreshTokenStore;
pub use task::MemoryTaskStore;
pub use user::MemoryUserStore;

/// Every in-memory store, wired together.
#[derive(Debug, Clone)]
pub struct MemoryStores {
    pub users: Arc<MemoryUserStore>,
    pub refresh_tokens: Arc<MemoryRefreshTokenStore>,
    pub projects: Arc<MemoryProjectStore>,
    pub boards: Arc<MemoryBoardStore>,
    pub columns: Arc<MemoryColumnStore>,
    pub tasks: Arc<MemoryTaskStore>,
    pub labels: Arc<MemoryLabelStore>,
    pub comments: Arc<MemoryCommentStore>,
}

impl MemoryStores {
    pub fn new() -> Self {
        let boards = Arc::new(MemoryBoardStore::new());
        let columns = Arc::new(MemoryColumnStore::new());
        Self {
            users: Arc::new(MemoryUserStore::new()),
            refresh_tokens: Arc::new(MemoryRefreshTokenStore::new()),
            projects: Arc::new(MemoryProjectStore::new(boards.clone(), columns.clone())),
            boards,
            columns,
            tasks: Arc::new(MemoryTaskStore::new()),
            labels: Arc::new(MemoryLabelStore::new()),
            comments: Arc::new(MemoryCommentStore::new()),
        }
    }
}

impl Default for MemoryStores {
    fn default() -> Self {
        Self::new()
    }
}

/// Sibling order: position ascending, then creation time.
pub(crate) fn by_position<T: Positioned>(a: &T, b: &T) -> Ordering {
    a.position()
        .total_cmp(&b.position())
        .then_with(|| a.created_at().cmp(&b.created_at()))
}
