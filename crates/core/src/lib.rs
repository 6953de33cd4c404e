//! `stocklens-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (ids, errors, currency
//! formatting). No IO, no HTTP, no storage.

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, UserId};
pub use money::{CURRENCY, format_amount, format_count};
