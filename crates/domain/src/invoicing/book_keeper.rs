//! Invoice issuance.

use super::{Invoice, InvoiceFactory, InvoiceLine, InvoiceRequest, TaxPolicy};

/// Turns invoice requests into taxed invoices.
///
/// The book keeper holds nothing but its factory; the tax policy is passed
/// per call so the same keeper can issue invoices under different rules.
#[derive(Debug, Clone, Default)]
pub struct BookKeeper {
    factory: InvoiceFactory,
}

impl BookKeeper {
    pub fn new(factory: InvoiceFactory) -> Self {
        Self { factory }
    }

    /// Issues an invoice for `request`, taxing every item with `policy`.
    ///
    /// The policy is called exactly once per item, in item order, and each
    /// result becomes one invoice line. An empty request yields an empty
    /// invoice. A policy error aborts issuance and is returned unchanged.
    #[tracing::instrument(
        skip(self, request, policy),
        fields(client_id = %request.client_data().client_id(), items = request.len())
    )]
    pub fn issuance<P>(&self, request: &InvoiceRequest, policy: &P) -> Result<Invoice, P::Error>
    where
        P: TaxPolicy + ?Sized,
    {
        let mut invoice = self.factory.create(request.client_data().clone());

        for item in request.items() {
            let tax = policy.calculate_tax(item.product_type(), item.total_cost())?;
            invoice.add_line(InvoiceLine::new(item, tax));
        }

        metrics::counter!("invoicing_invoices_issued_total").increment(1);
        metrics::counter!("invoicing_lines_total").increment(invoice.lines().len() as u64);
        tracing::info!(
            invoice_id = %invoice.id(),
            net = %invoice.net(),
            gross = %invoice.gross(),
            "invoice issued"
        );

        Ok(invoice)
    }
}
