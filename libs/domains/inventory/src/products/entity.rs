use sea_orm::entity::prelude::*;

use super::{ProductData, ProductRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub quantity_stock: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::categories::entity::Entity",
        from = "Column::CategoryId",
        to = "crate::categories::entity::Column::Id",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(
        belongs_to = "crate::suppliers::entity::Entity",
        from = "Column::SupplierId",
        to = "crate::suppliers::entity::Column::Id",
        on_delete = "Restrict"
    )]
    Supplier,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProductRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            data: ProductData {
                name: model.name,
                description: model.description,
                price: model.price,
                quantity_stock: model.quantity_stock,
                category_id: model.category_id,
                supplier_id: model.supplier_id,
            },
        }
    }
}
