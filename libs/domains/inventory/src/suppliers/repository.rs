use async_trait::async_trait;

use super::RESOURCE;
use super::models::{Supplier, SupplierRequest};
use crate::error::{InventoryError, InventoryResult};
use crate::memory::{SharedTables, Table};

/// Repository trait for Supplier persistence.
///
/// Tax id uniqueness belongs to the store: `create` and `update` fail with
/// `DuplicateTaxId` rather than writing a second supplier with the same id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn create(&self, input: SupplierRequest) -> InventoryResult<Supplier>;

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Supplier>>;

    /// All suppliers, ordered by id
    async fn list(&self) -> InventoryResult<Vec<Supplier>>;

    async fn update(&self, id: i64, input: SupplierRequest) -> InventoryResult<Supplier>;

    /// Returns whether a row was removed; `InUse` while a product is bought
    /// from the supplier
    async fn delete(&self, id: i64) -> InventoryResult<bool>;

    async fn exists(&self, id: i64) -> InventoryResult<bool>;

    /// Whether a supplier other than `excluding` already holds `tax_id`
    async fn exists_by_tax_id(&self, tax_id: &str, excluding: Option<i64>) -> InventoryResult<bool>;
}

/// In-memory implementation of SupplierRepository (for development/testing).
/// Obtained from [`crate::InMemoryStore::suppliers`].
#[derive(Debug, Clone)]
pub struct InMemorySupplierRepository {
    tables: SharedTables,
}

impl InMemorySupplierRepository {
    pub(crate) fn with_tables(tables: SharedTables) -> Self {
        Self { tables }
    }
}

fn tax_id_taken(table: &Table<Supplier>, tax_id: &str, excluding: Option<i64>) -> bool {
    table
        .values()
        .any(|s| s.tax_id == tax_id && Some(s.id) != excluding)
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn create(&self, input: SupplierRequest) -> InventoryResult<Supplier> {
        let mut tables = self.tables.write().await;
        let suppliers = &mut tables.suppliers;
        if tax_id_taken(suppliers, &input.tax_id, None) {
            return Err(InventoryError::DuplicateTaxId(input.tax_id));
        }

        let supplier = suppliers.insert_with(|id| Supplier::from_request(id, input));
        tracing::info!(supplier_id = supplier.id, "Created supplier");
        Ok(supplier)
    }

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Supplier>> {
        Ok(self.tables.read().await.suppliers.get(id).cloned())
    }

    async fn list(&self) -> InventoryResult<Vec<Supplier>> {
        Ok(self.tables.read().await.suppliers.values().cloned().collect())
    }

    async fn update(&self, id: i64, input: SupplierRequest) -> InventoryResult<Supplier> {
        let mut tables = self.tables.write().await;
        let suppliers = &mut tables.suppliers;
        if !suppliers.contains(id) {
            return Err(InventoryError::not_found(RESOURCE, id));
        }
        if tax_id_taken(suppliers, &input.tax_id, Some(id)) {
            return Err(InventoryError::DuplicateTaxId(input.tax_id));
        }

        let supplier = suppliers
            .get_mut(id)
            .ok_or(InventoryError::not_found(RESOURCE, id))?;
        *supplier = Supplier::from_request(id, input);

        tracing::info!(supplier_id = id, "Updated supplier");
        Ok(supplier.clone())
    }

    async fn delete(&self, id: i64) -> InventoryResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.supplier_in_use(id) {
            return Err(InventoryError::InUse {
                resource: RESOURCE,
                id,
            });
        }

        let removed = tables.suppliers.remove(id);
        if removed {
            tracing::info!(supplier_id = id, "Deleted supplier");
        }
        Ok(removed)
    }

    async fn exists(&self, id: i64) -> InventoryResult<bool> {
        Ok(self.tables.read().await.suppliers.contains(id))
    }

    async fn exists_by_tax_id(
        &self,
        tax_id: &str,
        excluding: Option<i64>,
    ) -> InventoryResult<bool> {
        Ok(tax_id_taken(&self.tables.read().await.suppliers, tax_id, excluding))
    }
}
