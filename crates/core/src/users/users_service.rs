use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use async_trait::async_trait;
use log::debug;
use rand::rngs::OsRng;

use super::users_model::{NewUser, RegisterUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

/// Service for registration and credential checks.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::Unexpected(format!("Failed to hash password: {e}")))
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, input: RegisterUser) -> Result<User> {
        input.validate()?;
        let email = input.email.trim().to_lowercase();

        if self.repository.find_by_email(&email)?.is_some() {
            return Err(Error::ConstraintViolation(
                "Email already registered".to_string(),
            ));
        }

        let new_user = NewUser {
            email: email.clone(),
            password_hash: Self::hash_password(&input.password)?,
        };
        let user = self.repository.insert(new_user).await?;
        debug!("Registered user {}", user.id);
        Ok(user)
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim().to_lowercase();
        let user = self
            .repository
            .find_by_email(&email)?
            .ok_or_else(|| Error::Unauthorized("Invalid credentials".to_string()))?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| Error::Unexpected(format!("Invalid stored password hash: {e}")))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| Error::Unauthorized("Invalid credentials".to_string()))?;

        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository
            .find_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(format!("User {user_id}")))
    }
}
