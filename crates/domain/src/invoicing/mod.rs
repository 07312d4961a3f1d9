//! Invoice issuance: requests, taxes, invoices and the book keeper.

mod book_keeper;
mod factory;
mod invoice;
mod policy;
mod request;
mod tax;

pub use book_keeper::BookKeeper;
pub use factory::InvoiceFactory;
pub use invoice::{Invoice, InvoiceLine};
pub use policy::{DefaultTaxPolicy, TaxError, TaxRate, TaxRates};
pub use request::{InvoiceRequest, RequestItem};
pub use tax::{Tax, TaxPolicy};
