//! PostgreSQL implementations of the store traits.

pub mod board;
pub mod column;
pub mod comment;
pub mod label;
pub mod project;
pub mod refresh_token;
pub mod task;
pub mod user;

pub use board::BoardRepository;
pub use column::ColumnRepository;
pub use comment::CommentRepository;
pub use label::LabelRepository;
pub use project::ProjectRepository;
pub use refresh_token::RefreshTokenRepository;
pub use task::TaskRepository;
pub use user::UserRepository;
