//! Product catalog types as seen by the sales domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Money;

/// Product identifier (SKU).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Product category, used as the lookup key of a tax policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Standard,
    Drug,
    Food,
    Dvd,
}

impl ProductType {
    /// Every product type, in declaration order.
    pub const ALL: [ProductType; 4] = [
        ProductType::Standard,
        ProductType::Drug,
        ProductType::Food,
        ProductType::Dvd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Standard => "STANDARD",
            ProductType::Drug => "DRUG",
            ProductType::Food => "FOOD",
            ProductType::Dvd => "DVD",
        }
    }

    /// Short marker printed next to reduced tax rates on invoices.
    pub fn tax_marker(&self) -> Option<char> {
        match self {
            ProductType::Drug => Some('D'),
            ProductType::Food => Some('F'),
            ProductType::Standard | ProductType::Dvd => None,
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product.
///
/// Availability may flip at any time in the catalog; the sales domain only
/// reads it at the moment a product is added to a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    product_type: ProductType,
    available: bool,
}

impl Product {
    /// Creates a new, available product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        product_type: ProductType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            product_type,
            available: true,
        }
    }

    /// Returns the same product marked as unavailable.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Captures an immutable copy of the product's commercial data.
    pub fn snapshot(&self) -> ProductData {
        ProductData {
            product_id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            product_type: self.product_type,
            snapshot_at: Utc::now(),
        }
    }
}

/// Immutable product data captured when a product enters a reservation
/// or an invoice request.
///
/// Later catalog changes (price, name) do not affect data already captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub product_type: ProductType,
    pub snapshot_at: DateTime<Utc>,
}
