//! Project labels and their task associations.

pub mod service;

pub use service::{CreateLabelRequest, LabelService};
