//! User profile.

pub mod service;

pub use service::{UpdateProfileRequest, UserService};
