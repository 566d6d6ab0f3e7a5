//! HTTP-level integration tests over in-memory stores.

mod auth_test;
mod board_test;
mod collaboration_test;
mod helpers;
mod task_test;
