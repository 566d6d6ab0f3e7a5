//! Route handlers, one module per resource.

pub mod auth;
pub mod board;
pub mod column;
pub mod comment;
pub mod health;
pub mod label;
pub mod project;
pub mod task;
pub mod user;
