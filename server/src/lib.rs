//! HTTP API for the ShopSecure sandbox storefront.
//!
//! Everything hangs off an [`AppContext`] built per server instance (or per
//! test): the commerce store, the security controller and the audit log.
//! There are no process-wide singletons, so two contexts never share mode or
//! log state.

mod error;
mod extract;
mod render;
mod routes;

pub use error::ApiError;
pub use extract::USER_ID_HEADER;
pub use render::{CartItemView, ReviewView, SearchResponse};

use axum::routing::{delete, get, patch, post};
use axum::Router;
use shopsecure_security::{AuditLog, LogCategory, SecurityController};
use shopsecure_store::CommerceStore;
use std::sync::Arc;

/// Shared state for one sandbox instance.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<CommerceStore>,
    pub security: Arc<SecurityController>,
    pub audit: Arc<AuditLog>,
}

impl AppContext {
    /// Builds a context around a store, starting in vulnerable mode with
    /// the security console's opening entries in the log.
    #[must_use]
    pub fn new(store: CommerceStore) -> Self {
        let audit = Arc::new(AuditLog::new());
        let security = Arc::new(SecurityController::new(Arc::clone(&audit)));
        let ctx = Self {
            store: Arc::new(store),
            security,
            audit,
        };
        ctx.announce_boot();
        ctx
    }

    /// Appended oldest-first; the log reads newest-first, so the init notice
    /// tops the console.
    fn announce_boot(&self) {
        let boot = [
            (
                "[Alert] Shopping cart notes are vulnerable to DOM-based XSS attacks.",
                LogCategory::Error,
            ),
            (
                "[Alert] Review system is vulnerable to Stored XSS attacks.",
                LogCategory::Error,
            ),
            (
                "[Alert] Search functionality is vulnerable to Reflected XSS attacks.",
                LogCategory::Error,
            ),
            (
                "[Warning] Security is currently in VULNERABLE mode. Toggle the security switch to enable protections.",
                LogCategory::Warning,
            ),
            (
                "[System] Security console initialized. This console logs XSS attempts and system events.",
                LogCategory::Info,
            ),
        ];
        for (message, category) in boot {
            self.audit.append(message, category);
        }
    }
}

/// Builds the HTTP API router with the given context.
pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/products", get(routes::list_products))
        .route("/products/{id}", get(routes::get_product))
        .route("/products/{id}/reviews", get(routes::list_reviews))
        .route("/categories/{category}", get(routes::products_by_category))
        .route("/search", get(routes::search))
        .route("/reviews", post(routes::create_review))
        .route("/cart", get(routes::get_cart).post(routes::add_to_cart))
        .route("/cart/{id}/quantity", patch(routes::update_cart_quantity))
        .route("/cart/{id}/note", patch(routes::update_cart_note))
        .route("/cart/{id}", delete(routes::remove_cart_item))
        .route("/security/mode", get(routes::security_mode))
        .route("/security/toggle", post(routes::toggle_security))
        .route("/security/log", get(routes::security_log))
        .route("/security/log/clear", post(routes::clear_security_log))
        .with_state(ctx)
}
