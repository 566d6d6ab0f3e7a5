//! Boards and their columns.

pub mod service;

pub use service::{
    BoardService, CreateBoardRequest, CreateColumnRequest, UpdateBoardRequest,
    UpdateColumnRequest,
};
