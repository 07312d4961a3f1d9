//! Sales commands.

use common::AggregateId;
use domain::ProductId;

/// Command to add a product to a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProductCommand {
    /// The reservation (order) to add to.
    pub order_id: AggregateId,

    /// The requested product.
    pub product_id: ProductId,

    /// Quantity to reserve.
    pub quantity: u32,
}

impl AddProductCommand {
    /// Creates a new AddProductCommand.
    pub fn new(order_id: AggregateId, product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            order_id,
            product_id: product_id.into(),
            quantity,
        }
    }
}
