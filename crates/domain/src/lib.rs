//! Domain layer for the sales system.
//!
//! This crate provides the synchronous domain model:
//! - `Money` fixed-point amounts
//! - Products, clients and the snapshots taken of them
//! - The `Reservation` aggregate with its lifecycle
//! - Invoice issuance through the `BookKeeper` and a pluggable `TaxPolicy`

pub mod client;
pub mod invoicing;
pub mod money;
pub mod product;
pub mod reservation;

pub use client::{Client, ClientData, ClientId};
pub use invoicing::{
    BookKeeper, DefaultTaxPolicy, Invoice, InvoiceFactory, InvoiceLine, InvoiceRequest,
    RequestItem, Tax, TaxError, TaxPolicy, TaxRate, TaxRates,
};
pub use money::Money;
pub use product::{Product, ProductData, ProductId, ProductType};
pub use reservation::{Reservation, ReservationError, ReservationItem, ReservationStatus};
