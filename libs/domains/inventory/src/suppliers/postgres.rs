use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use super::models::{Supplier, SupplierRequest};
use super::repository::SupplierRepository;
use super::{RESOURCE, entity};
use crate::error::{InventoryError, InventoryResult, is_foreign_key_violation, is_unique_violation};

#[derive(Clone)]
pub struct PgSupplierRepository {
    db: DatabaseConnection,
}

impl PgSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Maps the unique index on `tax_id` to a typed conflict.
fn write_error(err: DbErr, tax_id: &str) -> InventoryError {
    if is_unique_violation(&err) {
        InventoryError::DuplicateTaxId(tax_id.to_string())
    } else {
        err.into()
    }
}

fn active_model(id: Option<i64>, input: SupplierRequest) -> entity::ActiveModel {
    entity::ActiveModel {
        id: id.map_or(NotSet, Set),
        name: Set(input.name),
        tax_id: Set(input.tax_id),
        phone: Set(input.phone),
        email: Set(input.email),
    }
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn create(&self, input: SupplierRequest) -> InventoryResult<Supplier> {
        let tax_id = input.tax_id.clone();
        let model = active_model(None, input)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, &tax_id))?;

        tracing::info!(supplier_id = model.id, "Created supplier");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Supplier>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> InventoryResult<Vec<Supplier>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, input: SupplierRequest) -> InventoryResult<Supplier> {
        let tax_id = input.tax_id.clone();
        let model = active_model(Some(id), input)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => InventoryError::not_found(RESOURCE, id),
                other => write_error(other, &tax_id),
            })?;

        tracing::info!(supplier_id = id, "Updated supplier");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> InventoryResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    InventoryError::InUse {
                        resource: RESOURCE,
                        id,
                    }
                } else {
                    e.into()
                }
            })?;

        if result.rows_affected > 0 {
            tracing::info!(supplier_id = id, "Deleted supplier");
        }
        Ok(result.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> InventoryResult<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }

    async fn exists_by_tax_id(
        &self,
        tax_id: &str,
        excluding: Option<i64>,
    ) -> InventoryResult<bool> {
        let mut query = entity::Entity::find().filter(entity::Column::TaxId.eq(tax_id));
        if let Some(id) = excluding {
            query = query.filter(entity::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.is_some())
    }
}
