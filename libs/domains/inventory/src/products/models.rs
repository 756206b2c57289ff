use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::categories::Category;
use crate::suppliers::Supplier;
use crate::validation::validate_not_blank;

/// Product as returned by the API, with its category and supplier resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity_stock: i32,
    pub category: Category,
    pub supplier: Supplier,
}

/// Stored shape of a product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: i64,
    pub data: ProductData,
}

/// Product fields without the id, references held as ids
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity_stock: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

/// Payload for create and update.
///
/// `categoryId` and `supplierId` are required on create. On update an absent
/// id keeps the current reference.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Hammer")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    #[schema(example = 9.99)]
    pub price: f64,
    #[validate(range(min = 0))]
    #[schema(example = 10)]
    pub quantity_stock: i32,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    #[schema(example = 5)]
    pub quantity_stock: i32,
}

impl Product {
    pub(crate) fn assemble(record: ProductRecord, category: Category, supplier: Supplier) -> Self {
        Self {
            id: record.id,
            name: record.data.name,
            description: record.data.description,
            price: record.data.price,
            quantity_stock: record.data.quantity_stock,
            category,
            supplier,
        }
    }
}
