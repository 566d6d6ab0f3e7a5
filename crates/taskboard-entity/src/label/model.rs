//! Label entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Color assigned when a label is created without one.
pub const DEFAULT_LABEL_COLOR: &str = "#6b7280";

/// A project-scoped label that can be attached to tasks.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Label {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new label.
#[derive(Debug, Clone)]
pub struct CreateLabel {
    pub project_id: Uuid,
    pub name: String,
    pub color: String,
}
