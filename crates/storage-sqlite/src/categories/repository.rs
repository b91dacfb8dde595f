use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use spendwise_core::categories::{Category, CategoryRepositoryTrait, CategoryUpdate, NewCategory};
use spendwise_core::errors::{DatabaseError, Error};
use spendwise_core::Result;

use super::model::{CategoryDB, NewCategoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, expenses};

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn list_for_user(&self, for_user_id: &str) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let categories_db = categories::table
            .filter(categories::user_id.eq(for_user_id))
            .order(categories::name.asc())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(categories_db.into_iter().map(Category::from).collect())
    }

    fn find_by_id(&self, for_user_id: &str, category_id: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let category_db = categories::table
            .filter(categories::user_id.eq(for_user_id))
            .filter(categories::id.eq(category_id))
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(category_db.map(Category::from))
    }

    fn has_expenses(&self, category_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        diesel::select(exists(
            expenses::table.filter(expenses::category_id.eq(category_id)),
        ))
        .get_result::<bool>(&mut conn)
        .map_err(|e| StorageError::from(e).into())
    }

    async fn insert(&self, for_user_id: &str, new_category: NewCategory) -> Result<Category> {
        let owner = for_user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let now = Utc::now().naive_utc();
                let new_category_db = NewCategoryDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: owner,
                    name: new_category.name.trim().to_string(),
                    budget_amount: new_category.budget_amount.to_string(),
                    created_at: now,
                    updated_at: now,
                };

                let result_db = diesel::insert_into(categories::table)
                    .values(&new_category_db)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Category::from(result_db))
            })
            .await
    }

    async fn update(
        &self,
        for_user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        let owner = for_user_id.to_string();
        let target = category_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let mut category_db = categories::table
                    .filter(categories::user_id.eq(&owner))
                    .filter(categories::id.eq(&target))
                    .first::<CategoryDB>(conn)
                    .map_err(StorageError::from)?;

                if let Some(new_name) = update.name {
                    category_db.name = new_name.trim().to_string();
                }
                if let Some(new_budget) = update.budget_amount {
                    category_db.budget_amount = new_budget.to_string();
                }
                category_db.updated_at = Utc::now().naive_utc();

                let result_db = diesel::update(categories::table.find(&target))
                    .set(&category_db)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Category::from(result_db))
            })
            .await
    }

    async fn delete(&self, for_user_id: &str, category_id: &str) -> Result<usize> {
        let owner = for_user_id.to_string();
        let target = category_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    categories::table
                        .filter(categories::user_id.eq(&owner))
                        .filter(categories::id.eq(&target)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Category {target}"
                    ))));
                }
                Ok(deleted)
            })
            .await
    }
}
