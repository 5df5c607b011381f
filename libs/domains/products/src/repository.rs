use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::filter::ProductFilter;
use crate::models::{Product, ProductDraft};

/// Repository trait for Product persistence
///
/// Lookups report absence as `None`/`false`; the service decides whether that
/// is an error. Listing order is by id, which for generated UUIDv7 ids is
/// creation order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product under a freshly generated id
    async fn create(&self, draft: ProductDraft) -> ProductResult<Product>;

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn search(&self, filter: &ProductFilter) -> ProductResult<Vec<Product>>;

    /// Overwrite every field but the id. `None` if the id is unknown.
    async fn update(&self, id: &str, draft: ProductDraft) -> ProductResult<Option<Product>>;

    /// `false` if the id is unknown
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<String, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, draft: ProductDraft) -> ProductResult<Product> {
        let product = Product::from_draft(Uuid::now_v7().to_string(), draft);
        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn search(&self, filter: &ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, draft: ProductDraft) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(existing) = products.get_mut(id) else {
            return Ok(None);
        };

        *existing = Product::from_draft(id, draft);

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let removed = self.products.write().await.remove(id).is_some();
        if removed {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }
}
