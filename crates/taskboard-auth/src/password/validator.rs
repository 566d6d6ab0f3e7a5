//! Registration input policy.

use taskboard_core::error::AppError;

/// Normalised registration fields that passed [`PasswordPolicy::check_registration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRegistration {
    pub email: String,
    pub display_name: String,
}

/// Enforces the required registration fields and minimum password length.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Trim and lower-case an email for storage and lookup.
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Validate registration input.
    ///
    /// Length is measured in characters, not bytes. The password itself is
    /// never trimmed.
    pub fn check_registration(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> Result<CheckedRegistration, AppError> {
        let email = Self::normalize_email(email);
        let display_name = display_name.trim();

        if email.is_empty() || display_name.is_empty() || password.is_empty() {
            return Err(AppError::validation(
                "email, name, and password are required",
            ));
        }

        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "password must be at least {} characters",
                self.min_length
            )));
        }

        Ok(CheckedRegistration {
            email,
            display_name: display_name.to_string(),
        })
    }
}
