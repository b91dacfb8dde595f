//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a registered user.
///
/// The password hash never leaves the server; it is skipped during
/// serialization so the model can be returned from API handlers as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Input model for registration, carrying the plaintext password.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if !email.contains('@') {
            return Err(
                ValidationError::InvalidInput(format!("'{}' is not an email address", email))
                    .into(),
            );
        }
        if self.password.len() < 8 {
            return Err(ValidationError::InvalidInput(
                "Password must be at least 8 characters".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Insert model handed to the repository after the password has been hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}
