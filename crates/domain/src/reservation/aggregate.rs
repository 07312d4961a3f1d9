//! Reservation aggregate implementation.

use chrono::{DateTime, Utc};
use common::{AggregateId, Version};
use serde::{Deserialize, Serialize};

use super::{ReservationError, ReservationStatus};
use crate::invoicing::{InvoiceRequest, RequestItem};
use crate::{Client, ClientData, Money, Product, ProductData, ProductId};

/// A product line held by a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationItem {
    /// Product data captured when the line was added.
    pub product: ProductData,

    /// Quantity reserved.
    pub quantity: u32,
}

impl ReservationItem {
    /// Returns the total cost of this line (quantity * unit price).
    pub fn total_cost(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// Reservation aggregate root.
///
/// An order in progress: the products a client has picked before
/// confirming. The aggregate is loaded and saved whole through a
/// repository; `version` is the repository's optimistic concurrency token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: AggregateId,

    #[serde(default)]
    version: Version,

    status: ReservationStatus,

    /// Snapshot of the client taken when the reservation was opened.
    client: ClientData,

    created_at: DateTime<Utc>,

    /// Lines in the order they were added.
    items: Vec<ReservationItem>,
}

impl Reservation {
    /// Opens a new, empty reservation for `client`.
    pub fn open(id: AggregateId, client: &Client) -> Self {
        Self::new(id, client.snapshot(), Utc::now())
    }

    /// Creates an empty, opened reservation from its parts.
    pub fn new(id: AggregateId, client: ClientData, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            version: Version::initial(),
            status: ReservationStatus::Opened,
            client,
            created_at,
            items: Vec::new(),
        }
    }

    /// Sets the persisted version.
    ///
    /// Called by repositories after a successful load or save.
    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }
}

// Query methods
impl Reservation {
    pub fn id(&self) -> AggregateId {
        self.id
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn client_data(&self) -> &ClientData {
        &self.client
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn items(&self) -> &[ReservationItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if any line holds the product.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items
            .iter()
            .any(|item| &item.product.product_id == product_id)
    }

    /// Returns the total cost of all lines.
    pub fn total_cost(&self) -> Money {
        self.items.iter().map(ReservationItem::total_cost).sum()
    }

    /// Builds the invoice request for this reservation, one request item
    /// per line.
    pub fn invoice_request(&self) -> InvoiceRequest {
        self.items.iter().fold(
            InvoiceRequest::new(self.client.clone()),
            |request, item| {
                request.with_item(RequestItem::new(
                    item.product.clone(),
                    item.quantity,
                    item.total_cost(),
                ))
            },
        )
    }
}

// Command methods
impl Reservation {
    /// Adds a product line.
    ///
    /// Adding is additive: the same product added twice produces two lines.
    /// A line whose cost, or whose addition to the reservation total, does
    /// not fit in [`Money`] is rejected.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), ReservationError> {
        if !self.status.can_modify_items() {
            return Err(ReservationError::InvalidStateTransition {
                current_status: self.status,
                action: "add product",
            });
        }

        if quantity == 0 {
            return Err(ReservationError::InvalidQuantity { quantity });
        }

        if !product.is_available() {
            return Err(ReservationError::ProductUnavailable {
                product_id: product.id().clone(),
            });
        }

        product
            .price()
            .checked_multiply(quantity)
            .and_then(|line_cost| self.total_cost().checked_add(line_cost))
            .ok_or_else(|| ReservationError::AmountOverflow {
                product_id: product.id().clone(),
                quantity,
            })?;

        self.items.push(ReservationItem {
            product: product.snapshot(),
            quantity,
        });
        Ok(())
    }

    /// Confirms the reservation. Requires at least one line.
    pub fn confirm(&mut self) -> Result<(), ReservationError> {
        if !self.status.can_confirm() {
            return Err(ReservationError::InvalidStateTransition {
                current_status: self.status,
                action: "confirm",
            });
        }

        if self.items.is_empty() {
            return Err(ReservationError::NoItems);
        }

        self.status = ReservationStatus::Confirmed;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), ReservationError> {
        if !self.status.can_cancel() {
            return Err(ReservationError::InvalidStateTransition {
                current_status: self.status,
                action: "cancel",
            });
        }

        self.status = ReservationStatus::Cancelled;
        Ok(())
    }
}
