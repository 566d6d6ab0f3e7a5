//! Label management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::LabelStore;
use taskboard_entity::label::{CreateLabel, DEFAULT_LABEL_COLOR, Label};

use crate::context::RequestContext;
use crate::ownership::OwnershipResolver;

/// Manages labels, which belong to a project and tag its tasks.
#[derive(Clone)]
pub struct LabelService {
    labels: Arc<dyn LabelStore>,
    resolver: Arc<OwnershipResolver>,
}

/// Request to create a label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLabelRequest {
    pub name: String,
    /// `#rgb` or `#rrggbb`. Defaults to a neutral grey.
    pub color: Option<String>,
}

fn normalize_color(color: Option<&str>) -> Result<String, AppError> {
    let color = match color.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_LABEL_COLOR.to_string()),
        Some(color) => color,
    };

    let valid = color.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });
    if !valid {
        return Err(AppError::validation(
            "color must be a hex value like #6b7280",
        ));
    }
    Ok(color.to_ascii_lowercase())
}

impl LabelService {
    /// Creates a new label service.
    pub fn new(labels: Arc<dyn LabelStore>, resolver: Arc<OwnershipResolver>) -> Self {
        Self { labels, resolver }
    }

    pub async fn create_label(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        req: CreateLabelRequest,
    ) -> Result<Label, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name is required"));
        }
        let color = normalize_color(req.color.as_deref())?;

        self.resolver
            .authorize_project(project_id, ctx.user_id)
            .await?;

        let label = self
            .labels
            .create(&CreateLabel {
                project_id,
                name: name.to_string(),
                color,
            })
            .await?;

        info!(project_id = %project_id, label_id = %label.id, "Label created");
        Ok(label)
    }

    pub async fn list_labels(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Vec<Label>, AppError> {
        self.resolver
            .authorize_project(project_id, ctx.user_id)
            .await?;
        self.labels.list_by_project(project_id).await
    }

    /// Deletes a label and detaches it from every task.
    pub async fn delete_label(&self, ctx: &RequestContext, label_id: Uuid) -> Result<(), AppError> {
        self.resolver.authorize_label(label_id, ctx.user_id).await?;

        if !self.labels.delete(label_id).await? {
            return Err(AppError::not_found(format!("Label {label_id} not found")));
        }

        info!(user_id = %ctx.user_id, label_id = %label_id, "Label deleted");
        Ok(())
    }

    /// Tags a task with a label from the same project. Repeating is a no-op.
    pub async fn attach_label(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        label_id: Uuid,
    ) -> Result<(), AppError> {
        let (_, project) = self
            .resolver
            .authorize_task_with_project(task_id, ctx.user_id)
            .await?;
        let label = self.resolver.authorize_label(label_id, ctx.user_id).await?;

        if label.project_id != project.id {
            return Err(AppError::validation(
                "label belongs to a different project than the task",
            ));
        }

        self.labels.attach(task_id, label_id).await?;
        debug!(task_id = %task_id, label_id = %label_id, "Label attached");
        Ok(())
    }

    /// Removes a label from a task. Removing an absent tag is a no-op.
    pub async fn detach_label(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        label_id: Uuid,
    ) -> Result<(), AppError> {
        self.resolver.authorize_task(task_id, ctx.user_id).await?;

        if self.labels.detach(task_id, label_id).await? {
            debug!(task_id = %task_id, label_id = %label_id, "Label detached");
        }
        Ok(())
    }

    pub async fn list_task_labels(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
    ) -> Result<Vec<Label>, AppError> {
        self.resolver.authorize_task(task_id, ctx.user_id).await?;
        self.labels.list_by_task(task_id).await
    }
}
