//! Repository traits and in-memory implementations.
//!
//! Repositories load and save aggregates whole. Concurrency control is their
//! responsibility: a save must be rejected when the stored copy changed
//! since the caller loaded it.

mod client;
mod product;
mod reservation;

pub use client::InMemoryClientRepository;
pub use product::InMemoryProductRepository;
pub use reservation::InMemoryReservationRepository;

use async_trait::async_trait;
use common::AggregateId;
use domain::{Client, ClientId, Product, ProductId, Reservation};

use crate::error::Result;

/// Storage for reservation aggregates.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Loads a reservation, failing with `NotFound` when there is none.
    async fn load(&self, id: AggregateId) -> Result<Reservation>;

    /// Saves a reservation previously returned by [`ReservationRepository::load`]
    /// (or a new one at the initial version).
    async fn save(&self, reservation: Reservation) -> Result<()>;
}

/// Read access to the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn load(&self, id: &ProductId) -> Result<Product>;
}

/// Read access to clients.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn load(&self, id: ClientId) -> Result<Client>;
}
