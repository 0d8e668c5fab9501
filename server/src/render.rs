//! Read-time rendering of untrusted text.
//!
//! The render contract: on every read, untrusted strings pass through the
//! controller's transform — raw in vulnerable mode, escaped in secure mode.
//! One transform covers all three surfaces (search echo, review text, cart
//! note); there is no per-surface override. Mutation responses echo the
//! stored row verbatim; the contract binds reads.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shopsecure_security::SecurityController;
use shopsecure_types::{CartItem, CartItemId, Product, ProductId, Review, ReviewId, UserId};

/// A review as replayed to product viewers. `title` and `content` have been
/// through the active mode's transform; the remaining fields are trusted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub username: String,
    pub title: String,
    pub content: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

impl ReviewView {
    /// Renders a stored review for the current mode.
    #[must_use]
    pub fn render(security: &SecurityController, review: Review) -> Self {
        Self {
            id: review.id,
            product_id: review.product_id,
            user_id: review.user_id,
            username: review.username,
            title: security.sanitize(&review.title),
            content: security.sanitize(&review.content),
            rating: review.rating,
            created_at: review.created_at,
        }
    }
}

/// A cart row with its product embedded, as the cart endpoints return it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub product: Option<Product>,
}

impl CartItemView {
    /// Renders a cart row for the owner's cart view: the note goes through
    /// the active mode's transform.
    #[must_use]
    pub fn render(security: &SecurityController, item: CartItem, product: Option<Product>) -> Self {
        let note = item.note.as_deref().map(|note| security.sanitize(note));
        Self::assemble(item, note, product)
    }

    /// Echoes the stored row untouched (mutation responses).
    #[must_use]
    pub fn raw(item: CartItem, product: Option<Product>) -> Self {
        let note = item.note.clone();
        Self::assemble(item, note, product)
    }

    fn assemble(item: CartItem, note: Option<String>, product: Option<Product>) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            product_id: item.product_id,
            quantity: item.quantity,
            note,
            created_at: item.created_at,
            product,
        }
    }
}

/// Search results plus the echoed query — the reflected surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub query: String,
}
