use async_trait::async_trait;

use super::RESOURCE;
use super::models::{Category, CategoryRequest};
use crate::error::{InventoryError, InventoryResult};
use crate::memory::SharedTables;

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, input: CategoryRequest) -> InventoryResult<Category>;

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Category>>;

    /// All categories, ordered by id
    async fn list(&self) -> InventoryResult<Vec<Category>>;

    /// Replaces the name; `NotFound` when the row is absent
    async fn update(&self, id: i64, input: CategoryRequest) -> InventoryResult<Category>;

    /// Returns whether a row was removed; `InUse` while a product is filed
    /// under the category
    async fn delete(&self, id: i64) -> InventoryResult<bool>;

    async fn exists(&self, id: i64) -> InventoryResult<bool>;
}

/// In-memory implementation of CategoryRepository (for development/testing).
/// Obtained from [`crate::InMemoryStore::categories`].
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    tables: SharedTables,
}

impl InMemoryCategoryRepository {
    pub(crate) fn with_tables(tables: SharedTables) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, input: CategoryRequest) -> InventoryResult<Category> {
        let mut tables = self.tables.write().await;
        let category = tables.categories.insert_with(|id| Category {
            id,
            name: input.name,
        });

        tracing::info!(category_id = category.id, "Created category");
        Ok(category)
    }

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Category>> {
        Ok(self.tables.read().await.categories.get(id).cloned())
    }

    async fn list(&self) -> InventoryResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn update(&self, id: i64, input: CategoryRequest) -> InventoryResult<Category> {
        let mut tables = self.tables.write().await;
        let category = tables
            .categories
            .get_mut(id)
            .ok_or(InventoryError::not_found(RESOURCE, id))?;
        category.name = input.name;

        tracing::info!(category_id = id, "Updated category");
        Ok(category.clone())
    }

    async fn delete(&self, id: i64) -> InventoryResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.category_in_use(id) {
            return Err(InventoryError::InUse {
                resource: RESOURCE,
                id,
            });
        }

        let removed = tables.categories.remove(id);
        if removed {
            tracing::info!(category_id = id, "Deleted category");
        }
        Ok(removed)
    }

    async fn exists(&self, id: i64) -> InventoryResult<bool> {
        Ok(self.tables.read().await.categories.contains(id))
    }
}
