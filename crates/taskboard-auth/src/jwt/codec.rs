//! Signing and verification of access tokens.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use taskboard_core::error::AppError;

use super::claims::AccessClaims;

/// The only algorithm accepted in a token header.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Signs and verifies HS256 access tokens with one shared secret.
///
/// Built once at startup from configuration and shared read-only.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec for the given secret.
    pub fn new(secret: &[u8]) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::configuration("JWT signing secret is empty"));
        }

        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Sign claims into a compact JWT.
    pub fn sign(&self, claims: &AccessClaims) -> Result<String, AppError> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }

    /// Verify signature, algorithm and expiry, and return the claims.
    ///
    /// Every failure is `Unauthorized`; the message says which check failed.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AppError> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                    AppError::unauthorized("Unexpected token algorithm")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use taskboard_core::ErrorKind;
    use taskboard_entity::user::UserRole;
    use uuid::Uuid;

    fn claims(ttl_seconds: i64) -> AccessClaims {
        let now = Utc::now();
        let id = Uuid::new_v4();
        AccessClaims {
            user_id: id,
            email: "a@x.com".into(),
            role: UserRole::Member,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            sub: id.to_string(),
        }
    }

    fn codec(secret: &str) -> TokenCodec {
        TokenCodec::new(secret.as_bytes()).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let codec = codec("secret-a");
        let original = claims(900);
        let token = codec.sign(&original).unwrap();
        assert_eq!(codec.verify(&token).unwrap(), original);
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = codec("secret-a").sign(&claims(900)).unwrap();
        let err = codec("secret-b").verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_altered_payload_rejected() {
        let codec = codec("secret-a");
        let mine = codec.sign(&claims(900)).unwrap();
        let other = codec.sign(&claims(900)).unwrap();

        // Keep my signature, swap in someone else's payload.
        let mine_parts: Vec<&str> = mine.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", mine_parts[0], other_parts[1], mine_parts[2]);

        let err = codec.verify(&forged).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_expired_rejected() {
        let codec = codec("secret-a");
        let token = codec.sign(&claims(-5)).unwrap();
        let err = codec.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let secret = "secret-a";
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims(900),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let err = codec(secret).verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_garbage_rejected() {
        let err = codec("secret-a").verify("not.a.jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_empty_secret_is_configuration_error() {
        let err = TokenCodec::new(b"").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
