//! Rate-table tax policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Tax, TaxPolicy};
use crate::{Money, ProductType};

/// Errors raised by [`DefaultTaxPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    /// No rate is configured for the product type.
    #[error("No tax rate configured for product type {0}")]
    UnsupportedProductType(ProductType),
}

/// A tax rate in basis points together with its invoice label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    pub basis_points: u32,
    pub label: String,
}

impl TaxRate {
    /// Creates a rate labelled from its percentage and the product type's
    /// marker, e.g. `7% (F)`.
    pub fn for_type(product_type: ProductType, basis_points: u32) -> Self {
        let percent = format_percent(basis_points);
        let label = match product_type.tax_marker() {
            Some(marker) => format!("{percent} ({marker})"),
            None => percent,
        };
        Self {
            basis_points,
            label,
        }
    }
}

/// Renders basis points as a percentage without trailing zeros.
fn format_percent(basis_points: u32) -> String {
    let whole = basis_points / 100;
    let fraction = basis_points % 100;
    if fraction == 0 {
        format!("{whole}%")
    } else if fraction % 10 == 0 {
        format!("{whole}.{}%", fraction / 10)
    } else {
        format!("{whole}.{fraction:02}%")
    }
}

/// Tax rates keyed by product type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxRates {
    rates: BTreeMap<ProductType, TaxRate>,
}

impl TaxRates {
    /// Default basis points for STANDARD products.
    pub const STANDARD_BPS: u32 = 2300;
    /// Default basis points for DRUG products.
    pub const DRUG_BPS: u32 = 500;
    /// Default basis points for FOOD products.
    pub const FOOD_BPS: u32 = 700;

    /// An empty table: every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock table: STANDARD 23%, DRUG 5%, FOOD 7%. DVD is not rated.
    pub fn standard() -> Self {
        Self::empty()
            .with_rate(ProductType::Standard, Self::STANDARD_BPS)
            .with_rate(ProductType::Drug, Self::DRUG_BPS)
            .with_rate(ProductType::Food, Self::FOOD_BPS)
    }

    /// Sets the rate for a product type, replacing any previous one.
    pub fn with_rate(mut self, product_type: ProductType, basis_points: u32) -> Self {
        self.set_rate(product_type, basis_points);
        self
    }

    pub fn set_rate(&mut self, product_type: ProductType, basis_points: u32) {
        self.rates
            .insert(product_type, TaxRate::for_type(product_type, basis_points));
    }

    pub fn get(&self, product_type: ProductType) -> Option<&TaxRate> {
        self.rates.get(&product_type)
    }
}

/// Tax policy backed by a [`TaxRates`] table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTaxPolicy {
    rates: TaxRates,
}

impl DefaultTaxPolicy {
    pub fn new(rates: TaxRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }
}

impl Default for DefaultTaxPolicy {
    fn default() -> Self {
        Self::new(TaxRates::standard())
    }
}

impl TaxPolicy for DefaultTaxPolicy {
    type Error = TaxError;

    fn calculate_tax(&self, product_type: ProductType, net: Money) -> Result<Tax, TaxError> {
        let rate = self
            .rates
            .get(product_type)
            .ok_or(TaxError::UnsupportedProductType(product_type))?;

        Ok(Tax::new(net.apply_rate(rate.basis_points), rate.label.clone()))
    }
}
