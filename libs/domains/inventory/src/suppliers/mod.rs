//! Suppliers, identified for business purposes by a unique tax id.

pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{Supplier, SupplierRequest};
pub use postgres::PgSupplierRepository;
pub use repository::{InMemorySupplierRepository, SupplierRepository};
pub use service::SupplierService;

pub(crate) const RESOURCE: &str = "Supplier";
