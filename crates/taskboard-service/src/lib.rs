//! # taskboard-service
//!
//! Business logic service layer for Taskboard. Every mutation below a
//! project is authorized by [`OwnershipResolver`] before it reaches a
//! store; reorderable collections get their positions from
//! [`PositionAllocator`].
//!
//! Services take their stores as `Arc<dyn …Store>` at construction.

pub mod board;
pub mod comment;
pub mod context;
pub mod label;
pub mod ownership;
pub mod position;
pub mod project;
pub mod task;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use board::BoardService;
pub use comment::CommentService;
pub use context::RequestContext;
pub use label::LabelService;
pub use ownership::OwnershipResolver;
pub use position::PositionAllocator;
pub use project::ProjectService;
pub use task::TaskService;
pub use user::UserService;
