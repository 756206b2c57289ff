use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use super::models::{ProductData, ProductRecord};
use super::repository::ProductRepository;
use super::{RESOURCE, entity};
use crate::error::{InventoryError, InventoryResult, is_foreign_key_violation};
use crate::{categories, suppliers};

#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn any(&self, column: entity::Column, id: i64) -> InventoryResult<bool> {
        let found = entity::Entity::find()
            .filter(column.eq(id))
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }

    /// A foreign key violation on write means a reference was deleted after
    /// the service resolved it; report which one as a bad reference.
    async fn write_error(&self, err: DbErr, category_id: i64, supplier_id: i64) -> InventoryError {
        if !is_foreign_key_violation(&err) {
            return err.into();
        }

        match categories::entity::Entity::find_by_id(category_id)
            .one(&self.db)
            .await
        {
            Ok(None) => InventoryError::invalid_reference(categories::RESOURCE, category_id),
            Ok(Some(_)) => InventoryError::invalid_reference(suppliers::RESOURCE, supplier_id),
            Err(lookup) => lookup.into(),
        }
    }
}

fn active_model(id: Option<i64>, data: ProductData) -> entity::ActiveModel {
    entity::ActiveModel {
        id: id.map_or(NotSet, Set),
        name: Set(data.name),
        description: Set(data.description),
        price: Set(data.price),
        quantity_stock: Set(data.quantity_stock),
        category_id: Set(data.category_id),
        supplier_id: Set(data.supplier_id),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, data: ProductData) -> InventoryResult<ProductRecord> {
        let (category_id, supplier_id) = (data.category_id, data.supplier_id);
        let model = match active_model(None, data).insert(&self.db).await {
            Ok(model) => model,
            Err(err) => return Err(self.write_error(err, category_id, supplier_id).await),
        };

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<ProductRecord>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> InventoryResult<Vec<ProductRecord>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, data: ProductData) -> InventoryResult<ProductRecord> {
        let (category_id, supplier_id) = (data.category_id, data.supplier_id);
        let model = match active_model(Some(id), data).update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(InventoryError::not_found(RESOURCE, id)),
            Err(err) => return Err(self.write_error(err, category_id, supplier_id).await),
        };

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> InventoryResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(result.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> InventoryResult<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }

    async fn exists_by_category(&self, category_id: i64) -> InventoryResult<bool> {
        self.any(entity::Column::CategoryId, category_id).await
    }

    async fn exists_by_supplier(&self, supplier_id: i64) -> InventoryResult<bool> {
        self.any(entity::Column::SupplierId, supplier_id).await
    }
}
