use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::{Product, ProductId};
use tokio::sync::RwLock;

use super::ProductRepository;
use crate::error::{Result, SalesError};

/// In-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    load_count: Arc<AtomicUsize>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a product.
    pub async fn insert(&self, product: Product) {
        self.products
            .write()
            .await
            .insert(product.id().clone(), product);
    }

    /// Flips a product's availability. Returns false if it is unknown.
    pub async fn set_available(&self, id: &ProductId, available: bool) -> bool {
        match self.products.write().await.get_mut(id) {
            Some(product) => {
                product.set_available(available);
                true
            }
            None => false,
        }
    }

    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn load(&self, id: &ProductId) -> Result<Product> {
        self.load_count.fetch_add(1, Ordering::SeqCst);

        self.products
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SalesError::not_found("Product", id))
    }
}
