//! Board entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Name of the board created alongside every new project.
pub const DEFAULT_BOARD_NAME: &str = "Main Board";

/// A board inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Board {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new board.
#[derive(Debug, Clone)]
pub struct CreateBoard {
    pub project_id: Uuid,
    pub name: String,
}
