//! Sales application layer.
//!
//! This crate wires the domain model to its collaborators:
//! - Repository and suggestion service traits with in-memory implementations
//! - `AddProductCommand` and its handler
//! - An explicit `SystemContext` identifying the acting user
//! - Configuration and tracing setup

pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod repository;
pub mod suggestion;
pub mod telemetry;

pub use command::AddProductCommand;
pub use config::{LogFormat, SalesConfig};
pub use context::{SystemContext, SystemUser};
pub use error::{Result, SalesError};
pub use handler::AddProductCommandHandler;
pub use repository::{
    ClientRepository, InMemoryClientRepository, InMemoryProductRepository,
    InMemoryReservationRepository, ProductRepository, ReservationRepository,
};
pub use suggestion::{InMemorySuggestionService, SuggestionService};
pub use telemetry::init_tracing;
