use std::sync::Arc;

use async_trait::async_trait;

use super::categories_model::{Category, CategoryUpdate, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing a user's categories and their budgets.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        self.repository.list_for_user(user_id)
    }

    fn get_category(&self, user_id: &str, category_id: &str) -> Result<Category> {
        self.repository
            .find_by_id(user_id, category_id)?
            .ok_or_else(|| Error::NotFound(format!("Category {category_id}")))
    }

    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        self.repository.insert(user_id, new_category).await
    }

    async fn update_category(
        &self,
        user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        update.validate()?;
        // Ownership check before the write reaches the single-writer queue
        self.get_category(user_id, category_id)?;
        self.repository.update(user_id, category_id, update).await
    }

    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<usize> {
        let category = self.get_category(user_id, category_id)?;
        if self.repository.has_expenses(&category.id)? {
            return Err(Error::ConstraintViolation(
                "Category has expenses; delete or move them first".to_string(),
            ));
        }
        self.repository.delete(user_id, category_id).await
    }
}
