//! Task listing filter.

use serde::Deserialize;
use uuid::Uuid;

use super::model::Task;
use super::priority::TaskPriority;

/// Optional narrowing of a board's task listing. Empty matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub column_id: Option<Uuid>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<Uuid>,
}

impl TaskFilter {
    /// Check whether a task satisfies every set criterion.
    pub fn matches(&self, task: &Task) -> bool {
        self.column_id.is_none_or(|c| task.column_id == c)
            && self.priority.is_none_or(|p| task.priority == p)
            && self.assignee_id.is_none_or(|a| task.assignee_id == Some(a))
    }
}
