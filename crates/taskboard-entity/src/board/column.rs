//! Column entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::position::Positioned;

/// Columns created alongside every new project, in display order.
pub const DEFAULT_COLUMN_NAMES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// An ordered column on a board.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Column {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    pub position: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Positioned for Column {
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

/// Data required to create a new column.
#[derive(Debug, Clone)]
pub struct CreateColumn {
    pub board_id: Uuid,
    pub name: String,
    pub position: f64,
}

/// Partial update of a column. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateColumn {
    pub name: Option<String>,
    pub position: Option<f64>,
}
