use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use common::{AggregateId, Version};
use domain::Reservation;
use tokio::sync::RwLock;

use super::ReservationRepository;
use crate::error::{Result, SalesError};

/// In-memory reservation repository with optimistic version checks.
///
/// Clones share the same storage, so a test can keep a handle while the
/// handler owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReservationRepository {
    reservations: Arc<RwLock<HashMap<AggregateId, Reservation>>>,
    load_count: Arc<AtomicUsize>,
    save_count: Arc<AtomicUsize>,
    fail_on_save: Arc<AtomicBool>,
}

impl InMemoryReservationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a reservation without touching the call counters.
    pub async fn insert(&self, reservation: Reservation) -> Result<()> {
        self.store(reservation).await
    }

    /// Returns the stored copy without touching the call counters.
    pub async fn get(&self, id: AggregateId) -> Option<Reservation> {
        self.reservations.read().await.get(&id).cloned()
    }

    /// Number of [`ReservationRepository::load`] calls so far.
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    /// Number of [`ReservationRepository::save`] calls so far.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Configures the repository to fail every save.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.fail_on_save.store(fail, Ordering::SeqCst);
    }

    async fn store(&self, mut reservation: Reservation) -> Result<()> {
        let mut reservations = self.reservations.write().await;
        let id = reservation.id();

        let stored_version = reservations
            .get(&id)
            .map(Reservation::version)
            .unwrap_or(Version::initial());

        if stored_version != reservation.version() {
            return Err(SalesError::ConcurrencyConflict {
                reservation_id: id,
                expected: reservation.version(),
                actual: stored_version,
            });
        }

        reservation.set_version(stored_version.next());
        reservations.insert(id, reservation);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn load(&self, id: AggregateId) -> Result<Reservation> {
        self.load_count.fetch_add(1, Ordering::SeqCst);

        self.reservations
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| SalesError::not_found("Reservation", id))
    }

    async fn save(&self, reservation: Reservation) -> Result<()> {
        self.save_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_on_save.load(Ordering::SeqCst) {
            return Err(SalesError::Repository("storage unavailable".to_string()));
        }

        self.store(reservation).await
    }
}
