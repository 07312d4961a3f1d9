//! Tax values and the tax policy seam.

use serde::{Deserialize, Serialize};

use crate::{Money, ProductType};

/// Tax charged on one invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Human-readable rate label, e.g. `23%` or `5% (D)`.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Pluggable rule mapping a product category and a net amount to a tax.
///
/// Implementations may be stateful: the [`BookKeeper`](super::BookKeeper)
/// calls [`TaxPolicy::calculate_tax`] exactly once per request item and
/// never caches results. Errors are returned to the caller of the book
/// keeper as-is.
pub trait TaxPolicy {
    /// Error raised when the policy cannot price a line.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the tax for a line of the given category and net amount.
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> Result<Tax, Self::Error>;
}

/// Any function with the right shape is a tax policy.
impl<F, E> TaxPolicy for F
where
    F: Fn(ProductType, Money) -> Result<Tax, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn calculate_tax(&self, product_type: ProductType, net: Money) -> Result<Tax, E> {
        self(product_type, net)
    }
}
