//! Remote data gateway for the inventory dashboard.
//!
//! Wraps the REST API behind typed async operations, caches list reads
//! per entity tag, discards stale in-flight responses, and keeps the
//! signed-in session in memory.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use cache::{CacheOutcome, EntityTag, ListCache, ProductQuery};
pub use client::ApiGateway;
pub use config::{BASE_URL_ENV, GatewayConfig};
pub use error::{GatewayError, GatewayResult};
pub use session::{Session, SessionStore};
