use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use super::RESOURCE;
use super::models::{Product, ProductData, ProductRecord, ProductRequest};
use super::repository::ProductRepository;
use crate::categories::{self, Category, CategoryRepository};
use crate::error::{InventoryError, InventoryResult};
use crate::suppliers::{self, Supplier, SupplierRepository};

/// Service layer for Product business logic.
///
/// Holds the category and supplier repositories to validate references on
/// the way in and to resolve them on the way out.
pub struct ProductService<P, C, S>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    products: Arc<P>,
    categories: Arc<C>,
    suppliers: Arc<S>,
}

impl<P, C, S> ProductService<P, C, S>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    pub fn new(products: Arc<P>, categories: Arc<C>, suppliers: Arc<S>) -> Self {
        Self {
            products,
            categories,
            suppliers,
        }
    }

    pub async fn list_products(&self) -> InventoryResult<Vec<Product>> {
        let records = self.products.list().await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let categories: HashMap<i64, Category> = self
            .categories
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let suppliers: HashMap<i64, Supplier> = self
            .suppliers
            .list()
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        records
            .into_iter()
            .map(|record| -> InventoryResult<Product> {
                let (category_id, supplier_id) = (record.data.category_id, record.data.supplier_id);
                let category = categories
                    .get(&category_id)
                    .cloned()
                    .ok_or_else(|| dangling(record.id, categories::RESOURCE, category_id))?;
                let supplier = suppliers
                    .get(&supplier_id)
                    .cloned()
                    .ok_or_else(|| dangling(record.id, suppliers::RESOURCE, supplier_id))?;
                Ok(Product::assemble(record, category, supplier))
            })
            .collect()
    }

    pub async fn get_product(&self, id: i64) -> InventoryResult<Product> {
        let record = self.find_record(id).await?;
        self.hydrate(record).await
    }

    /// Both references must be supplied and must resolve. A reference deleted
    /// after the lookup is caught by the store's own check on insert.
    pub async fn create_product(&self, input: ProductRequest) -> InventoryResult<Product> {
        input.validate()?;

        let category_id = input
            .category_id
            .ok_or(InventoryError::MissingReference("categoryId"))?;
        let supplier_id = input
            .supplier_id
            .ok_or(InventoryError::MissingReference("supplierId"))?;
        let category = self.resolve_category(category_id).await?;
        let supplier = self.resolve_supplier(supplier_id).await?;

        let record = self
            .products
            .create(ProductData {
                name: input.name,
                description: input.description,
                price: input.price,
                quantity_stock: input.quantity_stock,
                category_id: category.id,
                supplier_id: supplier.id,
            })
            .await?;

        Ok(Product::assemble(record, category, supplier))
    }

    /// Overwrites name, description, price and stock. A reference is only
    /// looked up again when the request names a different id than the one
    /// stored.
    pub async fn update_product(&self, id: i64, input: ProductRequest) -> InventoryResult<Product> {
        let current = self.find_record(id).await?;
        input.validate()?;

        let category = match input.category_id {
            Some(category_id) if category_id != current.data.category_id => {
                self.resolve_category(category_id).await?
            }
            _ => self.stored_category(id, current.data.category_id).await?,
        };
        let supplier = match input.supplier_id {
            Some(supplier_id) if supplier_id != current.data.supplier_id => {
                self.resolve_supplier(supplier_id).await?
            }
            _ => self.stored_supplier(id, current.data.supplier_id).await?,
        };

        let record = self
            .products
            .update(
                id,
                ProductData {
                    name: input.name,
                    description: input.description,
                    price: input.price,
                    quantity_stock: input.quantity_stock,
                    category_id: category.id,
                    supplier_id: supplier.id,
                },
            )
            .await?;

        Ok(Product::assemble(record, category, supplier))
    }

    pub async fn delete_product(&self, id: i64) -> InventoryResult<()> {
        if !self.products.delete(id).await? {
            return Err(InventoryError::not_found(RESOURCE, id));
        }
        Ok(())
    }

    /// Sets the stock level and leaves every other field untouched.
    pub async fn update_stock(&self, id: i64, quantity_stock: i32) -> InventoryResult<Product> {
        let current = self.find_record(id).await?;
        if quantity_stock < 0 {
            return Err(InventoryError::Validation(
                "quantityStock must not be negative".to_string(),
            ));
        }

        let data = ProductData {
            quantity_stock,
            ..current.data
        };
        let record = self.products.update(id, data).await?;
        self.hydrate(record).await
    }

    async fn find_record(&self, id: i64) -> InventoryResult<ProductRecord> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::not_found(RESOURCE, id))
    }

    async fn hydrate(&self, record: ProductRecord) -> InventoryResult<Product> {
        let category = self.stored_category(record.id, record.data.category_id).await?;
        let supplier = self.stored_supplier(record.id, record.data.supplier_id).await?;
        Ok(Product::assemble(record, category, supplier))
    }

    /// Looks up a client-supplied category id.
    async fn resolve_category(&self, id: i64) -> InventoryResult<Category> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::invalid_reference(categories::RESOURCE, id))
    }

    async fn resolve_supplier(&self, id: i64) -> InventoryResult<Supplier> {
        self.suppliers
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::invalid_reference(suppliers::RESOURCE, id))
    }

    /// Looks up a reference already stored on a product.
    async fn stored_category(&self, product_id: i64, id: i64) -> InventoryResult<Category> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| dangling(product_id, categories::RESOURCE, id))
    }

    async fn stored_supplier(&self, product_id: i64, id: i64) -> InventoryResult<Supplier> {
        self.suppliers
            .get_by_id(id)
            .await?
            .ok_or_else(|| dangling(product_id, suppliers::RESOURCE, id))
    }
}

// Deletes of referenced rows are refused by the stores, so this means the
// data was modified outside this service.
fn dangling(product_id: i64, resource: &str, id: i64) -> InventoryError {
    InventoryError::Internal(format!(
        "Product {} references missing {} {}",
        product_id,
        resource.to_lowercase(),
        id
    ))
}
