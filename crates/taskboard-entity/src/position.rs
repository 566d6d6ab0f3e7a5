//! Shared shape of reorderable siblings.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An entity ordered among its siblings by a fractional position.
///
/// Columns are ordered within a board, tasks within a column. Positions
/// are not unique; ties fall back to creation time.
pub trait Positioned {
    fn id(&self) -> Uuid;
    fn position(&self) -> f64;
    fn created_at(&self) -> DateTime<Utc>;
}
