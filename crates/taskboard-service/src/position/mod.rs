//! Fractional ordering of columns and tasks.

pub mod allocator;

pub use allocator::{POSITION_GAP, PositionAllocator};
