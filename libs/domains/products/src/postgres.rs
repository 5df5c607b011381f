use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity,
    error::ProductResult,
    filter::ProductFilter,
    models::{Product, ProductDraft},
    repository::ProductRepository,
};

/// PostgreSQL implementation of [`ProductRepository`].
///
/// Writes run in their own transaction and commit before returning.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, draft: ProductDraft) -> ProductResult<Product> {
        let active_model = entity::ActiveModel {
            id: Set(Uuid::now_v7().to_string()),
            name: Set(draft.name),
            description: Set(draft.description),
            price: Set(draft.price),
        };

        let txn = self.db.begin().await?;
        let model = active_model.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn search(&self, filter: &ProductFilter) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(filter.condition())
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: &str, draft: ProductDraft) -> ProductResult<Option<Product>> {
        let txn = self.db.begin().await?;

        // Dropping `txn` without commit rolls back.
        let Some(model) = entity::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = model.into();
        active_model.name = Set(draft.name);
        active_model.description = Set(draft.description);
        active_model.price = Set(draft.price);

        let updated = active_model.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(product_id = %updated.id, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let txn = self.db.begin().await?;
        let result = entity::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(deleted)
    }
}
