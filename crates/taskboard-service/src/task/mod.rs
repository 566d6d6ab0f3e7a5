//! Tasks: creation, filtering, edits and moves between columns.

pub mod export;
pub mod service;

pub use export::render_tasks_csv;
pub use service::{CreateTaskRequest, TaskService, UpdateTaskRequest, present};
