//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let tax_id = builder.tax_id("main");
//!     let supplier_name = builder.name("supplier", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic values
///
/// Values derive from a seed, so a test sees the same data on every run
/// while different tests do not collide on unique columns.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_supplier");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(42);
    /// assert_eq!(builder.name("category", "main"), "test-category-42-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Tax id unique to this builder and `suffix`, shaped like `12.345-<seed>-<suffix>`
    pub fn tax_id(&self, suffix: &str) -> String {
        format!("{:02}.{:03}-{}-{}", self.seed % 100, self.seed % 1000, self.seed, suffix)
    }

    /// A phone number in the reserved 555 range
    pub fn phone(&self) -> String {
        format!("555-{:04}", self.seed % 10_000)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a result is an error matching `predicate`
    pub fn assert_err_matches<T: std::fmt::Debug, E: std::fmt::Debug>(
        result: Result<T, E>,
        predicate: impl FnOnce(&E) -> bool,
        context: &str,
    ) {
        match result {
            Ok(value) => panic!("{}: expected error, got Ok({:?})", context, value),
            Err(err) => assert!(predicate(&err), "{}: unexpected error {:?}", context, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.tax_id("a"), builder2.tax_id("a"));
        assert_eq!(builder1.name("supplier", "test"), builder2.name("supplier", "test"));
        assert_eq!(builder1.phone(), "555-0042");
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.tax_id("main"), builder2.tax_id("main"));
    }

    #[test]
    fn test_tax_ids_differ_by_suffix() {
        let builder = TestDataBuilder::new(7);
        assert_ne!(builder.tax_id("a"), builder.tax_id("b"));
    }
}
