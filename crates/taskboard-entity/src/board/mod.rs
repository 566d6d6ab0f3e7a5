//! Board and column entities.

pub mod column;
pub mod model;

pub use column::{Column, CreateColumn, UpdateColumn};
pub use model::{Board, CreateBoard};
