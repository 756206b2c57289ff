//! Inventory Domain
//!
//! Categories, suppliers and the products that tie them together.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, OpenAPI docs
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, reference checks, hydration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, request payloads
//! └─────────────┘
//! ```
//!
//! Each of [`categories`], [`suppliers`] and [`products`] follows that
//! layout. The product service also holds the category and supplier
//! repositories, and the category and supplier services hold the product
//! repository so a referenced row cannot be deleted. The stores hold the
//! same line on their own: Postgres through foreign keys, the in-memory
//! [`InMemoryStore`] by checking references under one lock.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::InMemoryStore;
//! use std::sync::Arc;
//!
//! let store = InMemoryStore::new();
//! let router = domain_inventory::router(
//!     Arc::new(store.categories()),
//!     Arc::new(store.suppliers()),
//!     Arc::new(store.products()),
//! );
//! ```

pub mod categories;
pub mod error;
pub mod products;
pub mod suppliers;

mod memory;
mod validation;

use axum::Router;
use std::sync::Arc;

pub use categories::{
    Category, CategoryRepository, CategoryRequest, CategoryService, InMemoryCategoryRepository,
    PgCategoryRepository,
};
pub use error::{InventoryError, InventoryResult};
pub use memory::InMemoryStore;
pub use products::{
    InMemoryProductRepository, PgProductRepository, Product, ProductRepository, ProductRequest,
    ProductService, StockUpdate,
};
pub use suppliers::{
    InMemorySupplierRepository, PgSupplierRepository, Supplier, SupplierRepository,
    SupplierRequest, SupplierService,
};

/// Wires the three services over shared repositories and mounts them at
/// `/categories`, `/suppliers` and `/products`.
pub fn router<C, S, P>(categories: Arc<C>, suppliers: Arc<S>, products: Arc<P>) -> Router
where
    C: CategoryRepository + 'static,
    S: SupplierRepository + 'static,
    P: ProductRepository + 'static,
{
    let category_service = CategoryService::new(categories.clone(), products.clone());
    let supplier_service = SupplierService::new(suppliers.clone(), products.clone());
    let product_service = ProductService::new(products, categories, suppliers);

    Router::new()
        .nest("/categories", categories::handlers::router(category_service))
        .nest("/suppliers", suppliers::handlers::router(supplier_service))
        .nest("/products", products::handlers::router(product_service))
}
