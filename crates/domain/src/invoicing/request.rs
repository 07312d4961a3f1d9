//! Invoice requests.

use serde::{Deserialize, Serialize};

use crate::{ClientData, Money, ProductData, ProductType};

/// One priced line of an invoice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    product: ProductData,
    quantity: u32,
    total_cost: Money,
}

impl RequestItem {
    /// Creates a request item.
    ///
    /// `total_cost` is taken as given; it is usually the unit price times
    /// `quantity` but may already include discounts.
    pub fn new(product: ProductData, quantity: u32, total_cost: Money) -> Self {
        Self {
            product,
            quantity,
            total_cost,
        }
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn product_type(&self) -> ProductType {
        self.product.product_type
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }
}

/// The finalized set of items an invoice must be issued for.
///
/// Items keep their insertion order. An empty request is valid and yields
/// an empty invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    /// Creates an empty request for a client.
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    /// Appends an item.
    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    /// Builder-style variant of [`InvoiceRequest::add`].
    pub fn with_item(mut self, item: RequestItem) -> Self {
        self.add(item);
        self
    }

    pub fn client_data(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the items' total costs.
    pub fn total_cost(&self) -> Money {
        self.items.iter().map(RequestItem::total_cost).sum()
    }
}
