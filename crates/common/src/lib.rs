//! Identifier and version types shared by the sales workspace crates.

mod types;

pub use types::{AggregateId, Version};
