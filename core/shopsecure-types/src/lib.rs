//! Core type definitions for ShopSecure.
//!
//! Defines the identifier newtypes and the domain records shared by the
//! store and the HTTP layer:
//! - [`ProductId`], [`ReviewId`], [`CartItemId`], [`UserId`] — typed row ids
//! - [`Product`], [`Review`], [`CartItem`] — persisted records
//! - [`NewReview`], [`NewCartItem`] — validated-on-write input shapes
//!
//! All records serialize with camelCase field names; that is the JSON shape
//! the storefront API speaks.

mod catalog;
mod ids;

pub use catalog::{CartItem, NewCartItem, NewProduct, NewReview, Product, Review};
pub use ids::{CartItemId, ProductId, ReviewId, UserId};
