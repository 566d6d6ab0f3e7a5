//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::priority::TaskPriority;
use crate::position::Positioned;

/// An ordered task inside a column.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub column_id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    /// Optional assignee.
    pub assignee_id: Option<Uuid>,
    pub position: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Positioned for Task {
    fn id(&self) -> Uuid {
        self.id
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Data required to create a new task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub column_id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub assignee_id: Option<Uuid>,
    pub position: f64,
}

/// Partial update of a task.
///
/// `assignee_id` is doubly optional: `None` keeps the assignee,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<Option<Uuid>>,
}

/// Target of a move. The position is stored exactly as given.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MoveTask {
    pub column_id: Uuid,
    pub position: f64,
}
