//! SQLite storage layer for the ShopSecure storefront.
//!
//! Persists products, reviews and cart items, and maintains the derived
//! rating aggregates on products. Untrusted text (review fields, cart notes)
//! is stored exactly as submitted; escaping is a render-time concern and
//! never happens here.
//!
//! # Architecture
//!
//! - One SQLite connection behind a mutex; every operation runs to
//!   completion before the next begins
//! - Review creation recomputes the owning product's aggregate from the
//!   persisted review set inside the same transaction as the insert
//! - Cart adds merge on (user, product) via a single upsert statement

mod error;
mod seed;
mod store;

pub use error::{StoreError, StoreResult};
pub use seed::seed_demo_catalog;
pub use store::CommerceStore;
