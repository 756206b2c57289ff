use std::sync::Arc;
use validator::Validate;

use super::RESOURCE;
use super::models::{Supplier, SupplierRequest};
use super::repository::SupplierRepository;
use crate::error::{InventoryError, InventoryResult};
use crate::products::ProductRepository;

/// Service layer for Supplier business logic
pub struct SupplierService<S: SupplierRepository, P: ProductRepository> {
    suppliers: Arc<S>,
    products: Arc<P>,
}

impl<S: SupplierRepository, P: ProductRepository> SupplierService<S, P> {
    pub fn new(suppliers: Arc<S>, products: Arc<P>) -> Self {
        Self {
            suppliers,
            products,
        }
    }

    pub async fn list_suppliers(&self) -> InventoryResult<Vec<Supplier>> {
        self.suppliers.list().await
    }

    pub async fn get_supplier(&self, id: i64) -> InventoryResult<Supplier> {
        self.suppliers
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::not_found(RESOURCE, id))
    }

    /// Whether a supplier with this id is stored.
    pub async fn supplier_exists(&self, id: i64) -> InventoryResult<bool> {
        self.suppliers.exists(id).await
    }

    pub async fn create_supplier(&self, input: SupplierRequest) -> InventoryResult<Supplier> {
        input.validate()?;
        self.ensure_tax_id_free(&input.tax_id, None).await?;
        self.suppliers.create(input).await
    }

    pub async fn update_supplier(
        &self,
        id: i64,
        input: SupplierRequest,
    ) -> InventoryResult<Supplier> {
        if !self.supplier_exists(id).await? {
            return Err(InventoryError::not_found(RESOURCE, id));
        }
        input.validate()?;
        self.ensure_tax_id_free(&input.tax_id, Some(id)).await?;
        self.suppliers.update(id, input).await
    }

    /// Missing suppliers are 404. A supplier still referenced by a product
    /// is kept; the store enforces the same rule, so a product written
    /// after the check below still blocks the delete.
    pub async fn delete_supplier(&self, id: i64) -> InventoryResult<()> {
        if !self.supplier_exists(id).await? {
            return Err(InventoryError::not_found(RESOURCE, id));
        }
        if self.products.exists_by_supplier(id).await? {
            return Err(InventoryError::InUse {
                resource: RESOURCE,
                id,
            });
        }

        if !self.suppliers.delete(id).await? {
            // Removed concurrently between the check and the delete
            return Err(InventoryError::not_found(RESOURCE, id));
        }
        Ok(())
    }

    // The store still rejects duplicates that race past this check.
    async fn ensure_tax_id_free(
        &self,
        tax_id: &str,
        excluding: Option<i64>,
    ) -> InventoryResult<()> {
        if self.suppliers.exists_by_tax_id(tax_id, excluding).await? {
            return Err(InventoryError::DuplicateTaxId(tax_id.to_string()));
        }
        Ok(())
    }
}
