//! # taskboard-auth
//!
//! Authentication for Taskboard.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and registration input policy
//! - `token`: random refresh secrets and their lookup hash
//! - `jwt`: HS256 access-token signing and verification
//! - `service`: registration, login, refresh rotation and logout

pub mod jwt;
pub mod password;
pub mod service;
pub mod token;

pub use jwt::{AccessClaims, TokenCodec};
pub use password::{PasswordHasher, PasswordPolicy};
pub use service::{AuthService, AuthSession, RegisterInput, TokenPair};
