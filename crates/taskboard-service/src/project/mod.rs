//! Project lifecycle.

pub mod service;

pub use service::{CreateProjectRequest, ProjectService, UpdateProjectRequest};
