//! Ownership-chain authorization.

pub mod resolver;

pub use resolver::OwnershipResolver;
