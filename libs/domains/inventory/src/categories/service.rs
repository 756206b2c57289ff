use std::sync::Arc;
use validator::Validate;

use super::RESOURCE;
use super::models::{Category, CategoryRequest};
use super::repository::CategoryRepository;
use crate::error::{InventoryError, InventoryResult};
use crate::products::ProductRepository;

/// Service layer for Category business logic
pub struct CategoryService<C: CategoryRepository, P: ProductRepository> {
    categories: Arc<C>,
    products: Arc<P>,
}

impl<C: CategoryRepository, P: ProductRepository> CategoryService<C, P> {
    pub fn new(categories: Arc<C>, products: Arc<P>) -> Self {
        Self {
            categories,
            products,
        }
    }

    pub async fn list_categories(&self) -> InventoryResult<Vec<Category>> {
        self.categories.list().await
    }

    pub async fn get_category(&self, id: i64) -> InventoryResult<Category> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::not_found(RESOURCE, id))
    }

    pub async fn create_category(&self, input: CategoryRequest) -> InventoryResult<Category> {
        input.validate()?;
        self.categories.create(input).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        input: CategoryRequest,
    ) -> InventoryResult<Category> {
        input.validate()?;
        self.categories.update(id, input).await
    }

    /// Deleting an absent category is a no-op. A category still filed
    /// against any product is kept and reported as in use, by this check or,
    /// when a product lands in between, by the store itself.
    pub async fn delete_category(&self, id: i64) -> InventoryResult<()> {
        if self.products.exists_by_category(id).await? {
            return Err(InventoryError::InUse {
                resource: RESOURCE,
                id,
            });
        }

        if !self.categories.delete(id).await? {
            tracing::debug!(category_id = id, "Delete of absent category ignored");
        }
        Ok(())
    }
}
