use async_trait::async_trait;

use super::RESOURCE;
use super::models::{ProductData, ProductRecord};
use crate::error::{InventoryError, InventoryResult};
use crate::memory::{SharedTables, Tables};
use crate::{categories, suppliers};

/// Repository trait for Product persistence.
///
/// Works on flat records; resolving references is the service's job. The
/// store still refuses to write a record whose category or supplier is gone
/// (`InvalidReference`), covering a delete that lands after the service
/// looked the reference up.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, data: ProductData) -> InventoryResult<ProductRecord>;

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<ProductRecord>>;

    /// All products, ordered by id
    async fn list(&self) -> InventoryResult<Vec<ProductRecord>>;

    /// Overwrites every stored field; `NotFound` when the row is absent
    async fn update(&self, id: i64, data: ProductData) -> InventoryResult<ProductRecord>;

    async fn delete(&self, id: i64) -> InventoryResult<bool>;

    async fn exists(&self, id: i64) -> InventoryResult<bool>;

    /// Whether any product is filed under the category
    async fn exists_by_category(&self, category_id: i64) -> InventoryResult<bool>;

    /// Whether any product is bought from the supplier
    async fn exists_by_supplier(&self, supplier_id: i64) -> InventoryResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing).
/// Obtained from [`crate::InMemoryStore::products`].
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    tables: SharedTables,
}

impl InMemoryProductRepository {
    pub(crate) fn with_tables(tables: SharedTables) -> Self {
        Self { tables }
    }
}

fn check_references(tables: &Tables, data: &ProductData) -> InventoryResult<()> {
    if !tables.categories.contains(data.category_id) {
        return Err(InventoryError::invalid_reference(categories::RESOURCE, data.category_id));
    }
    if !tables.suppliers.contains(data.supplier_id) {
        return Err(InventoryError::invalid_reference(suppliers::RESOURCE, data.supplier_id));
    }
    Ok(())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, data: ProductData) -> InventoryResult<ProductRecord> {
        let mut tables = self.tables.write().await;
        check_references(&tables, &data)?;
        let record = tables
            .products
            .insert_with(|id| ProductRecord { id, data });

        tracing::info!(product_id = record.id, "Created product");
        Ok(record)
    }

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<ProductRecord>> {
        Ok(self.tables.read().await.products.get(id).cloned())
    }

    async fn list(&self) -> InventoryResult<Vec<ProductRecord>> {
        Ok(self.tables.read().await.products.values().cloned().collect())
    }

    async fn update(&self, id: i64, data: ProductData) -> InventoryResult<ProductRecord> {
        let mut tables = self.tables.write().await;
        if !tables.products.contains(id) {
            return Err(InventoryError::not_found(RESOURCE, id));
        }
        check_references(&tables, &data)?;

        let record = tables
            .products
            .get_mut(id)
            .ok_or(InventoryError::not_found(RESOURCE, id))?;
        record.data = data;

        tracing::info!(product_id = id, "Updated product");
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> InventoryResult<bool> {
        let removed = self.tables.write().await.products.remove(id);
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }

    async fn exists(&self, id: i64) -> InventoryResult<bool> {
        Ok(self.tables.read().await.products.contains(id))
    }

    async fn exists_by_category(&self, category_id: i64) -> InventoryResult<bool> {
        Ok(self.tables.read().await.category_in_use(category_id))
    }

    async fn exists_by_supplier(&self, supplier_id: i64) -> InventoryResult<bool> {
        Ok(self.tables.read().await.supplier_in_use(supplier_id))
    }
}
