//! Clients and the client snapshot carried by reservations and invoices.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Creates a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a client ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ClientId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A client of the shop, owned by the customer domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
}

impl Client {
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copies the client's identity into a snapshot.
    pub fn snapshot(&self) -> ClientData {
        ClientData::new(self.id, self.name.clone())
    }
}

/// Client snapshot stored in reservations, invoice requests and invoices.
///
/// It is a copy, not a live reference: renaming a client does not rewrite
/// documents that were already issued for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientData {
    client_id: ClientId,
    name: String,
}

impl ClientData {
    pub fn new(client_id: ClientId, name: impl Into<String>) -> Self {
        Self {
            client_id,
            name: name.into(),
        }
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
