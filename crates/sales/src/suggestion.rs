//! Equivalent-product suggestions.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{Client, ClientId, Product, ProductId};
use tokio::sync::RwLock;

use crate::error::{Result, SalesError};

/// Proposes a substitute for a product the client cannot get.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    /// Returns an equivalent of `product` suitable for `client`.
    async fn suggest_equivalent(&self, product: &Product, client: &Client) -> Result<Product>;
}

#[derive(Debug, Default)]
struct InMemorySuggestionState {
    equivalents: HashMap<ProductId, Product>,
    calls: Vec<(ProductId, ClientId)>,
    fail_on_suggest: bool,
}

/// Suggestion service answering from a fixed table of equivalents.
#[derive(Debug, Clone, Default)]
pub struct InMemorySuggestionService {
    state: Arc<RwLock<InMemorySuggestionState>>,
}

impl InMemorySuggestionService {
    /// Creates a service with no known equivalents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `equivalent` as the substitute for `original`.
    pub async fn add_equivalent(&self, original: impl Into<ProductId>, equivalent: Product) {
        self.state
            .write()
            .await
            .equivalents
            .insert(original.into(), equivalent);
    }

    /// Configures the service to fail on every call.
    pub async fn set_fail_on_suggest(&self, fail: bool) {
        self.state.write().await.fail_on_suggest = fail;
    }

    /// The (product, client) pairs the service was asked about, in order.
    pub async fn calls(&self) -> Vec<(ProductId, ClientId)> {
        self.state.read().await.calls.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.state.read().await.calls.len()
    }
}

#[async_trait]
impl SuggestionService for InMemorySuggestionService {
    async fn suggest_equivalent(&self, product: &Product, client: &Client) -> Result<Product> {
        let mut state = self.state.write().await;
        state.calls.push((product.id().clone(), client.id()));

        if state.fail_on_suggest {
            return Err(SalesError::SuggestionService(
                "Suggestion engine unavailable".to_string(),
            ));
        }

        state.equivalents.get(product.id()).cloned().ok_or_else(|| {
            SalesError::SuggestionService(format!("No equivalent known for {}", product.id()))
        })
    }
}
