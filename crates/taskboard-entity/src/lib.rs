//! # taskboard-entity
//!
//! Domain entity models for Taskboard. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! Entities below [`project::Project`] store only their immediate parent's
//! id. Ownership is reconstructed by walking those references.

pub mod board;
pub mod comment;
pub mod label;
pub mod position;
pub mod project;
pub mod task;
pub mod token;
pub mod user;

pub use position::Positioned;
