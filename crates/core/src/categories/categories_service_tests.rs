#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::categories::{
        Category, CategoryRepositoryTrait, CategoryService, CategoryServiceTrait, CategoryUpdate,
        NewCategory,
    };
    use crate::errors::{Error, Result};

    // --- Mock CategoryRepository ---
    #[derive(Default)]
    struct MockCategoryRepository {
        categories: Mutex<Vec<Category>>,
        referenced: Mutex<HashSet<String>>,
    }

    impl MockCategoryRepository {
        fn mark_referenced(&self, category_id: &str) {
            self.referenced.lock().unwrap().insert(category_id.to_string());
        }
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn list_for_user(&self, user_id: &str) -> Result<Vec<Category>> {
            let mut out: Vec<Category> = self
                .categories
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect();
            out.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(out)
        }

        fn find_by_id(&self, user_id: &str, category_id: &str) -> Result<Option<Category>> {
            Ok(self
                .categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.user_id == user_id && c.id == category_id)
                .cloned())
        }

        fn has_expenses(&self, category_id: &str) -> Result<bool> {
            Ok(self.referenced.lock().unwrap().contains(category_id))
        }

        async fn insert(&self, user_id: &str, new_category: NewCategory) -> Result<Category> {
            let now = Utc::now().naive_utc();
            let category = Category {
                id: Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                name: new_category.name,
                budget_amount: new_category.budget_amount,
                created_at: now,
                updated_at: now,
            };
            self.categories.lock().unwrap().push(category.clone());
            Ok(category)
        }

        async fn update(
            &self,
            user_id: &str,
            category_id: &str,
            update: CategoryUpdate,
        ) -> Result<Category> {
            let mut categories = self.categories.lock().unwrap();
            let category = categories
                .iter_mut()
                .find(|c| c.user_id == user_id && c.id == category_id)
                .ok_or_else(|| Error::NotFound(category_id.to_string()))?;
            if let Some(name) = update.name {
                category.name = name;
            }
            if let Some(budget) = update.budget_amount {
                category.budget_amount = budget;
            }
            Ok(category.clone())
        }

        async fn delete(&self, user_id: &str, category_id: &str) -> Result<usize> {
            let mut categories = self.categories.lock().unwrap();
            let before = categories.len();
            categories.retain(|c| !(c.user_id == user_id && c.id == category_id));
            Ok(before - categories.len())
        }
    }

    fn setup() -> (CategoryService, Arc<MockCategoryRepository>) {
        let repo = Arc::new(MockCategoryRepository::default());
        (CategoryService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_rejects_negative_budget() {
        let (service, _) = setup();
        let err = service
            .create_category(
                "u1",
                NewCategory {
                    name: "Food".to_string(),
                    budget_amount: dec!(-10),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn zero_budget_is_allowed() {
        let (service, _) = setup();
        let category = service
            .create_category(
                "u1",
                NewCategory {
                    name: "Misc".to_string(),
                    budget_amount: dec!(0),
                },
            )
            .await
            .unwrap();
        assert_eq!(category.budget_amount, dec!(0));
    }

    #[tokio::test]
    async fn update_budget() {
        let (service, _) = setup();
        let category = service
            .create_category(
                "u1",
                NewCategory {
                    name: "Rent".to_string(),
                    budget_amount: dec!(500),
                },
            )
            .await
            .unwrap();
        let updated = service
            .update_category(
                "u1",
                &category.id,
                CategoryUpdate {
                    name: None,
                    budget_amount: Some(dec!(650)),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.budget_amount, dec!(650));
        assert_eq!(updated.name, "Rent");
    }

    #[tokio::test]
    async fn delete_blocked_while_expenses_reference_it() {
        let (service, repo) = setup();
        let category = service
            .create_category(
                "u1",
                NewCategory {
                    name: "Travel".to_string(),
                    budget_amount: dec!(100),
                },
            )
            .await
            .unwrap();
        repo.mark_referenced(&category.id);

        let err = service.delete_category("u1", &category.id).await.unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));

        // Category survives the rejected delete
        assert_eq!(service.list_categories("u1").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cannot_touch_another_users_category() {
        let (service, _) = setup();
        let category = service
            .create_category(
                "u1",
                NewCategory {
                    name: "Books".to_string(),
                    budget_amount: dec!(50),
                },
            )
            .await
            .unwrap();
        let err = service.delete_category("u2", &category.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
