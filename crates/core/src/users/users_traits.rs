use async_trait::async_trait;

use crate::errors::Result;
use crate::users::users_model::{NewUser, RegisterUser, User};

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn insert(&self, new_user: NewUser) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a new user, rejecting duplicate email addresses.
    async fn register(&self, input: RegisterUser) -> Result<User>;

    /// Verifies a credential pair and returns the matching user.
    fn authenticate(&self, email: &str, password: &str) -> Result<User>;

    fn get_user(&self, user_id: &str) -> Result<User>;
}
