//! Profile read and update for the authenticated user.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use taskboard_core::error::AppError;
use taskboard_database::UserStore;
use taskboard_entity::user::User;

use crate::context::RequestContext;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

/// Request to change the display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: String,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Gets the caller's own profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Changes the caller's display name.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        let display_name = req.display_name.trim();
        if display_name.is_empty() {
            return Err(AppError::validation("display_name cannot be empty"));
        }

        let user = self
            .users
            .update_display_name(ctx.user_id, display_name)
            .await?;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}
