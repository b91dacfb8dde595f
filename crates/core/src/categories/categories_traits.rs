use async_trait::async_trait;

use crate::categories::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::errors::Result;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// List all categories owned by a user, name ascending.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Category>>;

    /// Look up one of the user's categories by id.
    fn find_by_id(&self, user_id: &str, category_id: &str) -> Result<Option<Category>>;

    /// Check whether any expenses reference the category.
    fn has_expenses(&self, category_id: &str) -> Result<bool>;

    async fn insert(&self, user_id: &str, new_category: NewCategory) -> Result<Category>;

    async fn update(
        &self,
        user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;

    async fn delete(&self, user_id: &str, category_id: &str) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>>;

    fn get_category(&self, user_id: &str, category_id: &str) -> Result<Category>;

    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category>;

    async fn update_category(
        &self,
        user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;

    /// Delete a category. Fails with a constraint violation while expenses
    /// still reference it.
    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<usize>;
}
