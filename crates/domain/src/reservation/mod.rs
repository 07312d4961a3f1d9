//! Reservation aggregate and related types.

mod aggregate;
mod status;

pub use aggregate::{Reservation, ReservationItem};
pub use status::ReservationStatus;

use thiserror::Error;

use crate::ProductId;

/// Errors that can occur during reservation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// The reservation is not in a state that allows the action.
    #[error("Invalid state transition: cannot {action} from {current_status} status")]
    InvalidStateTransition {
        current_status: ReservationStatus,
        action: &'static str,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// The product being added is not available.
    #[error("Product unavailable: {product_id}")]
    ProductUnavailable { product_id: ProductId },

    /// The line cost or the reservation total exceeds the representable amount.
    #[error("Amount overflow: {quantity} x {product_id}")]
    AmountOverflow { product_id: ProductId, quantity: u32 },

    /// Reservation has no items.
    #[error("Reservation has no items")]
    NoItems,
}
