//! Sales application error types.

use common::{AggregateId, Version};
use domain::ReservationError;
use thiserror::Error;

/// Errors that can occur while handling sales commands.
#[derive(Debug, Error)]
pub enum SalesError {
    /// A repository has no record for the requested id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The reservation was saved by someone else since it was loaded.
    #[error(
        "Concurrency conflict for reservation {reservation_id}: expected version {expected}, found {actual}"
    )]
    ConcurrencyConflict {
        reservation_id: AggregateId,
        expected: Version,
        actual: Version,
    },

    /// The suggestion service failed.
    #[error("Suggestion service error: {0}")]
    SuggestionService(String),

    /// A repository failed for reasons other than a missing record.
    #[error("Repository error: {0}")]
    Repository(String),

    /// The reservation rejected the operation.
    #[error("Reservation error: {0}")]
    Reservation(#[from] ReservationError),
}

impl SalesError {
    /// Builds a [`SalesError::NotFound`] for any displayable id.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        SalesError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Convenience type alias for sales results.
pub type Result<T> = std::result::Result<T, SalesError>;
