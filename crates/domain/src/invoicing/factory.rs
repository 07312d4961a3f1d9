use common::AggregateId;

use super::Invoice;
use crate::ClientData;

/// Creates empty invoices with freshly generated identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceFactory;

impl InvoiceFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates an invoice shell addressed to `client`.
    pub fn create(&self, client: ClientData) -> Invoice {
        Invoice::new(AggregateId::generate(), client)
    }
}
