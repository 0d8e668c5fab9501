//! Persisted storefront records.
//!
//! `rating` and `review_count` on [`Product`] are derived values — the store
//! recomputes them from the review set whenever a review is created; nothing
//! else may write them.

use crate::{CartItemId, ProductId, ReviewId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Prices are integer minor-currency units (cents), never floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
    pub category: String,
    /// Rounded mean of all review ratings, 0 when unreviewed. Derived.
    pub rating: i64,
    /// Number of reviews on record for this product. Derived.
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a catalog product. Seeding/administration concern;
/// aggregates always start at zero and are owned by the review pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
    pub category: String,
}

/// A product review. Created once via submission, never mutated.
///
/// `title` and `content` hold the submitter's text exactly as received;
/// escaping happens at render time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub username: String,
    pub title: String,
    pub content: String,
    /// Integer star rating, 1–5.
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub username: String,
    pub title: String,
    pub content: String,
    pub rating: i64,
}

/// A row in a user's cart. At most one row exists per (user, product) pair;
/// adding the same product again merges into the existing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Always >= 1; rows are removed rather than zeroed.
    pub quantity: i64,
    /// Free-text note, stored verbatim.
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for adding a product to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
    #[serde(default)]
    pub note: Option<String>,
}
