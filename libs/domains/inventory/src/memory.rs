//! Backing tables for the in-memory repositories.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::categories::{Category, InMemoryCategoryRepository};
use crate::products::{InMemoryProductRepository, ProductRecord};
use crate::suppliers::{InMemorySupplierRepository, Supplier};

/// Rows keyed by id, ordered, with ids handed out from 1 upwards.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

/// The three tables, guarded together.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub categories: Table<Category>,
    pub suppliers: Table<Supplier>,
    pub products: Table<ProductRecord>,
}

impl Tables {
    pub fn category_in_use(&self, category_id: i64) -> bool {
        self.products
            .values()
            .any(|p| p.data.category_id == category_id)
    }

    pub fn supplier_in_use(&self, supplier_id: i64) -> bool {
        self.products
            .values()
            .any(|p| p.data.supplier_id == supplier_id)
    }
}

pub(crate) type SharedTables = Arc<RwLock<Tables>>;

/// In-memory inventory for development and tests.
///
/// Repositories handed out by one store share a single lock, so a product
/// write and a category or supplier delete never interleave between the
/// reference check and the write it guards.
///
/// ```rust
/// use domain_inventory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let categories = store.categories();
/// let products = store.products();
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    tables: SharedTables,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository::with_tables(self.tables.clone())
    }

    pub fn suppliers(&self) -> InMemorySupplierRepository {
        InMemorySupplierRepository::with_tables(self.tables.clone())
    }

    pub fn products(&self) -> InMemoryProductRepository {
        InMemoryProductRepository::with_tables(self.tables.clone())
    }
}
