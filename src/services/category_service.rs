//! Category service - CRUD over homepage categories.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Category, CategoryInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    async fn get_category(&self, id: i32) -> AppResult<Category>;

    async fn create_category(&self, input: CategoryInput) -> AppResult<Category>;

    async fn update_category(&self, id: i32, input: CategoryInput) -> AppResult<Category>;

    async fn delete_category(&self, id: i32) -> AppResult<()>;
}

pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.uow.categories().list().await
    }

    async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.uow
            .categories()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Category")
    }

    async fn create_category(&self, input: CategoryInput) -> AppResult<Category> {
        let category = self.uow.categories().create(input).await?;
        tracing::info!(category_id = category.id, "Category created");
        Ok(category)
    }

    async fn update_category(&self, id: i32, input: CategoryInput) -> AppResult<Category> {
        self.uow.categories().update(id, input).await
    }

    async fn delete_category(&self, id: i32) -> AppResult<()> {
        self.uow.categories().delete(id).await?;
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }
}
