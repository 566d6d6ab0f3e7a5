//! # taskboard-database
//!
//! Storage for Taskboard entities. [`store`] defines one async trait per
//! aggregate; [`repositories`] implements them over PostgreSQL and
//! [`memory`] implements them over concurrent maps for tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{
    BoardStore, ColumnStore, CommentStore, LabelStore, ProjectBootstrap, ProjectStore,
    RefreshTokenStore, TaskStore, UserStore,
};
