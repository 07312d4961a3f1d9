//! Reservation lifecycle.

use serde::{Deserialize, Serialize};

/// The status of a reservation in its lifecycle.
///
/// ```text
/// Opened ──► Confirmed
///   │            │
///   └────────────┴──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Items can be added.
    #[default]
    Opened,

    /// The client accepted the reservation.
    Confirmed,

    /// Terminal.
    Cancelled,
}

impl ReservationStatus {
    /// Returns true if items can be added in this status.
    pub fn can_modify_items(&self) -> bool {
        matches!(self, ReservationStatus::Opened)
    }

    pub fn can_confirm(&self) -> bool {
        matches!(self, ReservationStatus::Opened)
    }

    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Opened | ReservationStatus::Confirmed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Opened => "OPENED",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
