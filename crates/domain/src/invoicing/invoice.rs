//! Issued invoices.

use common::AggregateId;
use serde::{Deserialize, Serialize};

use super::{RequestItem, Tax};
use crate::{ClientData, Money, ProductData};

/// One taxed line of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    product: ProductData,
    quantity: u32,
    net: Money,
    tax: Tax,
}

impl InvoiceLine {
    /// Builds a line from a request item and the tax computed for it.
    pub fn new(item: &RequestItem, tax: Tax) -> Self {
        Self {
            product: item.product().clone(),
            quantity: item.quantity(),
            net: item.total_cost(),
            tax,
        }
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Amount before tax.
    pub fn net(&self) -> Money {
        self.net
    }

    pub fn tax(&self) -> &Tax {
        &self.tax
    }

    /// Amount including tax.
    pub fn gross(&self) -> Money {
        self.net + self.tax.amount()
    }
}

/// An issued invoice.
///
/// Invoices are built by the [`InvoiceFactory`](super::InvoiceFactory) and
/// filled by the [`BookKeeper`](super::BookKeeper); once handed out they
/// expose no mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: AggregateId,
    client: ClientData,
    lines: Vec<InvoiceLine>,
    net: Money,
    gross: Money,
}

impl Invoice {
    pub(crate) fn new(id: AggregateId, client: ClientData) -> Self {
        Self {
            id,
            client,
            lines: Vec::new(),
            net: Money::zero(),
            gross: Money::zero(),
        }
    }

    /// Accumulates the line into the totals, saturating at the `Money` bounds.
    pub(crate) fn add_line(&mut self, line: InvoiceLine) {
        self.net += line.net();
        self.gross += line.gross();
        self.lines.push(line);
    }

    pub fn id(&self) -> AggregateId {
        self.id
    }

    pub fn client_data(&self) -> &ClientData {
        &self.client
    }

    /// Lines in the order of the request items they were built from.
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn net(&self) -> Money {
        self.net
    }

    pub fn gross(&self) -> Money {
        self.gross
    }

    /// Total tax over all lines.
    pub fn total_tax(&self) -> Money {
        self.gross - self.net
    }
}
