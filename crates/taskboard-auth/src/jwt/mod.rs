//! HS256 access tokens.

pub mod claims;
pub mod codec;

pub use claims::AccessClaims;
pub use codec::TokenCodec;
