//! Board and column management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_database::{BoardStore, ColumnStore};
use taskboard_entity::board::{Board, Column, CreateBoard, CreateColumn, UpdateColumn};

use crate::context::RequestContext;
use crate::ownership::OwnershipResolver;
use crate::position::PositionAllocator;

/// Manages boards and the columns inside them.
#[derive(Clone)]
pub struct BoardService {
    boards: Arc<dyn BoardStore>,
    columns: Arc<dyn ColumnStore>,
    resolver: Arc<OwnershipResolver>,
}

/// Request to create a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
}

/// Request to rename a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBoardRequest {
    pub name: String,
}

/// Request to create a column. It is always appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateColumnRequest {
    pub name: String,
}

/// Rename and/or reposition a column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateColumnRequest {
    pub name: Option<String>,
    pub position: Option<f64>,
}

fn required_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name is required"));
    }
    Ok(name.to_string())
}

impl BoardService {
    /// Creates a new board service.
    pub fn new(
        boards: Arc<dyn BoardStore>,
        columns: Arc<dyn ColumnStore>,
        resolver: Arc<OwnershipResolver>,
    ) -> Self {
        Self {
            boards,
            columns,
            resolver,
        }
    }

    /// Creates an empty board in a project.
    pub async fn create_board(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        req: CreateBoardRequest,
    ) -> Result<Board, AppError> {
        let name = required_name(&req.name)?;
        self.resolver
            .authorize_project(project_id, ctx.user_id)
            .await?;

        let board = self
            .boards
            .create(&CreateBoard { project_id, name })
            .await?;

        info!(
            user_id = %ctx.user_id,
            project_id = %project_id,
            board_id = %board.id,
            "Board created"
        );
        Ok(board)
    }

    pub async fn list_boards(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Vec<Board>, AppError> {
        self.resolver
            .authorize_project(project_id, ctx.user_id)
            .await?;
        self.boards.list_by_project(project_id).await
    }

    pub async fn get_board(&self, ctx: &RequestContext, board_id: Uuid) -> Result<Board, AppError> {
        self.resolver.authorize_board(board_id, ctx.user_id).await
    }

    pub async fn rename_board(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
        req: UpdateBoardRequest,
    ) -> Result<Board, AppError> {
        let name = required_name(&req.name)?;
        self.resolver.authorize_board(board_id, ctx.user_id).await?;
        self.boards.rename(board_id, &name).await
    }

    /// Deletes a board. Its columns and tasks go with it.
    pub async fn delete_board(&self, ctx: &RequestContext, board_id: Uuid) -> Result<(), AppError> {
        self.resolver.authorize_board(board_id, ctx.user_id).await?;

        if !self.boards.delete(board_id).await? {
            return Err(AppError::not_found(format!("Board {board_id} not found")));
        }

        info!(user_id = %ctx.user_id, board_id = %board_id, "Board deleted");
        Ok(())
    }

    /// Appends a column after the board's current last column.
    pub async fn create_column(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
        req: CreateColumnRequest,
    ) -> Result<Column, AppError> {
        let name = required_name(&req.name)?;
        self.resolver.authorize_board(board_id, ctx.user_id).await?;

        let siblings = self.columns.list_by_board(board_id).await?;
        let position = PositionAllocator::append_position(&siblings);

        let column = self
            .columns
            .create(&CreateColumn {
                board_id,
                name,
                position,
            })
            .await?;

        debug!(board_id = %board_id, column_id = %column.id, position, "Column appended");
        Ok(column)
    }

    /// Columns of a board in display order.
    pub async fn list_columns(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
    ) -> Result<Vec<Column>, AppError> {
        self.resolver.authorize_board(board_id, ctx.user_id).await?;
        self.columns.list_by_board(board_id).await
    }

    /// Renames and/or repositions a column. The position is stored as given.
    pub async fn update_column(
        &self,
        ctx: &RequestContext,
        column_id: Uuid,
        req: UpdateColumnRequest,
    ) -> Result<Column, AppError> {
        let name = req.name.as_deref().map(required_name).transpose()?;
        self.resolver
            .authorize_column(column_id, ctx.user_id)
            .await?;

        self.columns
            .update(
                column_id,
                &UpdateColumn {
                    name,
                    position: req.position,
                },
            )
            .await
    }

    pub async fn delete_column(
        &self,
        ctx: &RequestContext,
        column_id: Uuid,
    ) -> Result<(), AppError> {
        self.resolver
            .authorize_column(column_id, ctx.user_id)
            .await?;

        if !self.columns.delete(column_id).await? {
            return Err(AppError::not_found(format!("Column {column_id} not found")));
        }

        info!(user_id = %ctx.user_id, column_id = %column_id, "Column deleted");
        Ok(())
    }

    /// Rewrites column positions to 1000, 2000, ... keeping their order.
    pub async fn renumber_columns(
        &self,
        ctx: &RequestContext,
        board_id: Uuid,
    ) -> Result<Vec<Column>, AppError> {
        self.resolver.authorize_board(board_id, ctx.user_id).await?;

        let columns = self.columns.list_by_board(board_id).await?;
        let positions = PositionAllocator::renumber(&columns);
        self.columns.set_positions(&positions).await?;

        info!(
            board_id = %board_id,
            count = positions.len(),
            "Columns renumbered"
        );
        self.columns.list_by_board(board_id).await
    }
}
