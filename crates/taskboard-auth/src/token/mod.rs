//! Refresh secrets.

pub mod secret;

pub use secret::{generate_refresh_secret, hash_refresh_secret};
