//! Products, each filed under one category and bought from one supplier.
//!
//! Rows only store the two foreign keys ([`ProductRecord`]); the service
//! resolves them into the [`Product`] returned to clients.

pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{Product, ProductData, ProductRecord, ProductRequest, StockUpdate};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;

pub(crate) const RESOURCE: &str = "Product";
