//! Label domain entities.

pub mod model;

pub use model::{CreateLabel, DEFAULT_LABEL_COLOR, Label};
