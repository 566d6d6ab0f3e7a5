//! Task domain entities.

pub mod filter;
pub mod model;
pub mod priority;

pub use filter::TaskFilter;
pub use model::{CreateTask, MoveTask, Task, UpdateTask};
pub use priority::TaskPriority;
