use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use super::models::{Category, CategoryRequest};
use super::repository::CategoryRepository;
use super::{RESOURCE, entity};
use crate::error::{InventoryError, InventoryResult, is_foreign_key_violation};

#[derive(Clone)]
pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, input: CategoryRequest) -> InventoryResult<Category> {
        let model = entity::ActiveModel {
            id: NotSet,
            name: Set(input.name),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(category_id = model.id, "Created category");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> InventoryResult<Option<Category>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> InventoryResult<Vec<Category>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, input: CategoryRequest) -> InventoryResult<Category> {
        let model = entity::ActiveModel {
            id: Set(id),
            name: Set(input.name),
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => InventoryError::not_found(RESOURCE, id),
            other => other.into(),
        })?;

        tracing::info!(category_id = id, "Updated category");
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
            tracing::info!(category_id = id, "Deleted category");
        }
        Ok(result.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> InventoryResult<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}
