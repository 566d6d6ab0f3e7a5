//! Response DTOs.

use serde::{Deserialize, Serialize};

use taskboard_database::ProjectBootstrap;
use taskboard_entity::board::{Board, Column};
use taskboard_entity::project::Project;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `connected`, `unavailable`, or `none` when running without a database.
    pub database: String,
}

/// A freshly created project with its default board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreatedResponse {
    pub project: Project,
    pub board: Board,
    pub columns: Vec<Column>,
}

impl From<ProjectBootstrap> for ProjectCreatedResponse {
    fn from(created: ProjectBootstrap) -> Self {
        Self {
            project: created.project,
            board: created.board,
            columns: created.columns,
        }
    }
}
