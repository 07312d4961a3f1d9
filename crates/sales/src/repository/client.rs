use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::{Client, ClientId};
use tokio::sync::RwLock;

use super::ClientRepository;
use crate::error::{Result, SalesError};

/// In-memory client store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientRepository {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
    load_count: Arc<AtomicUsize>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, client: Client) {
        self.clients.write().await.insert(client.id(), client);
    }

    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn load(&self, id: ClientId) -> Result<Client> {
        self.load_count.fetch_add(1, Ordering::SeqCst);

        self.clients
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| SalesError::not_found("Client", id))
    }
}
