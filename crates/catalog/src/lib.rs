//! Catalog records as the remote API serves them.
//!
//! These are snapshot read models owned by the remote data gateway: the
//! client reads them, filters them, and aggregates over them, but never
//! mutates them in place. Write payloads (`NewProduct`, `ProductPatch`,
//! `NewUser`) carry client-side required-field validation so malformed
//! submissions never reach the network.

pub mod category;
pub mod placeholder;
pub mod product;
pub mod user;

pub use category::{Category, UNCATEGORIZED, category_name};
pub use placeholder::{display_location, display_sku, placeholder_photo_index};
pub use product::{LOW_STOCK_THRESHOLD, NewProduct, Product, ProductPatch};
pub use user::{NewUser, Role, User};
