//! Registration, login, refresh rotation and logout.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use taskboard_core::config::AuthConfig;
use taskboard_core::error::AppError;
use taskboard_core::result::AppResult;
use taskboard_database::store::{RefreshTokenStore, UserStore};
use taskboard_entity::token::CreateRefreshToken;
use taskboard_entity::user::{CreateUser, User, UserRole};

use crate::jwt::{AccessClaims, TokenCodec};
use crate::password::{PasswordHasher, PasswordPolicy};
use crate::token::{generate_refresh_secret, hash_refresh_secret};

/// Access token plus raw refresh secret handed to the client.
///
/// The server keeps only the hash of `refresh_token`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Result of a successful login or refresh.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: User,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

/// Registration input as received from the client.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

/// Token lifecycle orchestration.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    codec: TokenCodec,
    hasher: PasswordHasher,
    policy: PasswordPolicy,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl AuthService {
    /// Build the service from configuration. Fails on an unusable secret or
    /// hash parameters.
    pub fn new(
        config: &AuthConfig,
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
    ) -> AppResult<Self> {
        config.validate()?;

        Ok(Self {
            users,
            refresh_tokens,
            codec: TokenCodec::new(config.jwt_secret.as_bytes())?,
            hasher: PasswordHasher::new(&config.password_hash)?,
            policy: PasswordPolicy::new(config.password_min_length),
            access_ttl: ttl(config.jwt_access_ttl_minutes, Duration::try_minutes)?,
            refresh_ttl: ttl(config.jwt_refresh_ttl_hours, Duration::try_hours)?,
        })
    }

    /// Create an account. Duplicate emails surface as `Conflict` from the
    /// store's uniqueness guarantee.
    pub async fn register(&self, input: RegisterInput) -> AppResult<User> {
        let checked =
            self.policy
                .check_registration(&input.email, &input.display_name, &input.password)?;

        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = self
            .users
            .create(&CreateUser {
                email: checked.email,
                display_name: checked.display_name,
                password_hash,
                role: UserRole::Member,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Authenticate with email and password.
    ///
    /// An unknown email and a wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let email = PasswordPolicy::normalize_email(email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            debug!("Login for unknown email");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(AppError::invalid_credentials());
        }

        let tokens = self.generate_token_pair(&user).await?;
        info!(user_id = %user.id, "User logged in");
        Ok(AuthSession { user, tokens })
    }

    /// Redeem a refresh secret for a new token pair.
    ///
    /// The presented secret is consumed whatever the outcome: a second
    /// presentation always fails.
    pub async fn refresh(&self, raw_secret: &str) -> AppResult<AuthSession> {
        let token_hash = hash_refresh_secret(raw_secret);

        let Some(stored) = self.refresh_tokens.take_by_hash(&token_hash).await? else {
            warn!("Refresh with unknown or already redeemed secret");
            return Err(AppError::unauthorized("Invalid refresh token"));
        };

        if stored.is_expired_at(Utc::now()) {
            warn!(user_id = %stored.user_id, "Refresh with expired secret");
            return Err(AppError::unauthorized("Refresh token has expired"));
        }

        let Some(user) = self.users.find_by_id(stored.user_id).await? else {
            warn!(user_id = %stored.user_id, "Refresh for missing user");
            return Err(AppError::unauthorized("Invalid refresh token"));
        };

        let tokens = self.generate_token_pair(&user).await?;
        info!(user_id = %user.id, "Refresh token rotated");
        Ok(AuthSession { user, tokens })
    }

    /// Forget a refresh secret. Succeeds whether or not it was known.
    pub async fn logout(&self, raw_secret: &str) -> AppResult<()> {
        let removed = self
            .refresh_tokens
            .delete_by_hash(&hash_refresh_secret(raw_secret))
            .await?;
        debug!(removed, "Logout");
        Ok(())
    }

    /// Verify an access token. Pure cryptography and clock; no store lookup.
    pub fn validate_access_token(&self, token: &str) -> AppResult<AccessClaims> {
        self.codec.verify(token)
    }

    /// Issue a signed access token and persist the hash of a new refresh
    /// secret.
    pub async fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        let now = Utc::now();
        let access_token = self
            .codec
            .sign(&AccessClaims::for_user(user, now, self.access_ttl))?;

        let refresh_token = generate_refresh_secret();
        self.refresh_tokens
            .create(&CreateRefreshToken {
                user_id: user.id,
                token_hash: hash_refresh_secret(&refresh_token),
                expires_at: now + self.refresh_ttl,
            })
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer",
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    /// Delete refresh tokens that are already past expiry.
    pub async fn purge_expired_refresh_tokens(&self) -> AppResult<u64> {
        let purged = self.refresh_tokens.delete_expired(Utc::now()).await?;
        if purged > 0 {
            info!(purged, "Purged expired refresh tokens");
        }
        Ok(purged)
    }
}

/// Convert a configured lifetime to a `Duration` without wrapping or panicking.
fn ttl(amount: u64, unit: fn(i64) -> Option<Duration>) -> AppResult<Duration> {
    i64::try_from(amount)
        .ok()
        .and_then(unit)
        .ok_or_else(|| AppError::configuration(format!("token lifetime {amount} is out of range")))
}
