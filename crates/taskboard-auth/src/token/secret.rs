//! Random refresh secrets and their deterministic lookup hash.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// Bytes of entropy in a refresh secret.
pub const REFRESH_SECRET_BYTES: usize = 32;

/// Generate a refresh secret: 32 bytes from the OS CSPRNG, hex encoded.
pub fn generate_refresh_secret() -> String {
    let mut bytes = [0u8; REFRESH_SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// SHA-256 hex digest of a raw refresh secret.
///
/// Fast and deterministic so it can serve as a lookup key. The input is
/// already 256 bits of randomness, so no salt or work factor is needed.
pub fn hash_refresh_secret(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}
