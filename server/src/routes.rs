//! Request handlers for the storefront and the operator's security console.

use crate::error::ApiError;
use crate::extract::{ApiJson, AuthUser};
use crate::render::{CartItemView, ReviewView, SearchResponse};
use crate::AppContext;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shopsecure_security::detect::{self, Surface};
use shopsecure_security::{LogEntry, SecurityMode};
use shopsecure_store::StoreError;
use shopsecure_types::{CartItem, CartItemId, NewCartItem, NewReview, Product, ProductId, Review, UserId};
use tracing::info;

// ── Products ─────────────────────────────────────────────────────

pub(crate) async fn list_products(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(ctx.store.products()?))
}

pub(crate) async fn get_product(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&id)?;
    let product = ctx
        .store
        .product(id)?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;
    Ok(Json(product))
}

pub(crate) async fn products_by_category(
    State(ctx): State<AppContext>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(ctx.store.products_by_category(&category)?))
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    q: String,
}

pub(crate) async fn search(
    State(ctx): State<AppContext>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    detect::inspect(&ctx.audit, Surface::Search, &params.q);
    let products = ctx.store.search_products(&params.q)?;
    // The echoed query is the reflected surface.
    let query = ctx.security.sanitize(&params.q);
    Ok(Json(SearchResponse { products, query }))
}

// ── Reviews ──────────────────────────────────────────────────────

pub(crate) async fn list_reviews(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ReviewView>>, ApiError> {
    let id = parse_product_id(&id)?;
    let reviews = ctx.store.reviews_for_product(id)?;
    let views = reviews
        .into_iter()
        .map(|review| ReviewView::render(&ctx.security, review))
        .collect();
    Ok(Json(views))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateReviewBody {
    product_id: ProductId,
    username: Option<String>,
    title: String,
    content: String,
    rating: i64,
}

pub(crate) async fn create_review(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<CreateReviewBody>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let username = body
        .username
        .unwrap_or_else(|| format!("user-{user}"));

    // Submission-time scan over every review field, in both modes.
    if let Some(field) = [&username, &body.title, &body.content]
        .into_iter()
        .find(|field| detect::looks_injected(field))
    {
        detect::inspect(&ctx.audit, Surface::Review, field);
    }

    let review = ctx
        .store
        .create_review(&NewReview {
            product_id: body.product_id,
            user_id: user,
            username,
            title: body.title,
            content: body.content,
            rating: body.rating,
        })
        .map_err(|err| match err {
            StoreError::NotFound(_) => ApiError::NotFound("Product not found".to_string()),
            other => other.into(),
        })?;

    info!(review = %review.id, product = %review.product_id, "review submitted");
    Ok((StatusCode::CREATED, Json(review)))
}

// ── Cart ─────────────────────────────────────────────────────────

pub(crate) async fn get_cart(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<CartItemView>>, ApiError> {
    let items = ctx.store.cart_items_for_user(user)?;
    let mut views = Vec::with_capacity(items.len());
    for item in items {
        let product = ctx.store.product(item.product_id)?;
        views.push(CartItemView::render(&ctx.security, item, product));
    }
    Ok(Json(views))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemBody {
    product_id: ProductId,
    quantity: i64,
    #[serde(default)]
    note: Option<String>,
}

pub(crate) async fn add_to_cart(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<AddCartItemBody>,
) -> Result<(StatusCode, Json<CartItemView>), ApiError> {
    if let Some(note) = &body.note {
        detect::inspect(&ctx.audit, Surface::CartNote, note);
    }

    let item = ctx
        .store
        .add_cart_item(&NewCartItem {
            user_id: user,
            product_id: body.product_id,
            quantity: body.quantity,
            note: body.note,
        })
        .map_err(|err| match err {
            StoreError::NotFound(_) => ApiError::NotFound("Product not found".to_string()),
            other => other.into(),
        })?;

    let product = ctx.store.product(item.product_id)?;
    Ok((StatusCode::CREATED, Json(CartItemView::raw(item, product))))
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateQuantityBody {
    quantity: i64,
}

pub(crate) async fn update_cart_quantity(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateQuantityBody>,
) -> Result<Json<CartItemView>, ApiError> {
    let item = owned_cart_item(&ctx, &id, user)?;
    let updated = ctx.store.update_cart_item_quantity(item.id, body.quantity)?;
    let product = ctx.store.product(updated.product_id)?;
    Ok(Json(CartItemView::raw(updated, product)))
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateNoteBody {
    note: String,
}

pub(crate) async fn update_cart_note(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateNoteBody>,
) -> Result<Json<CartItemView>, ApiError> {
    let item = owned_cart_item(&ctx, &id, user)?;
    detect::inspect(&ctx.audit, Surface::CartNote, &body.note);

    let updated = ctx.store.update_cart_item_note(item.id, &body.note)?;
    let product = ctx.store.product(updated.product_id)?;
    Ok(Json(CartItemView::raw(updated, product)))
}

pub(crate) async fn remove_cart_item(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let item = owned_cart_item(&ctx, &id, user)?;
    ctx.store.remove_cart_item(item.id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Resolves a cart row and enforces that the caller owns it.
fn owned_cart_item(ctx: &AppContext, raw_id: &str, user: UserId) -> Result<CartItem, ApiError> {
    let id: CartItemId = raw_id
        .parse()
        .map_err(|_| ApiError::Validation("Invalid cart item ID".to_string()))?;
    let item = ctx
        .store
        .cart_item(id)?
        .ok_or_else(|| ApiError::NotFound("Cart item not found".to_string()))?;
    if item.user_id != user {
        return Err(ApiError::AuthorizationDenied);
    }
    Ok(item)
}

fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation("Invalid product ID".to_string()))
}

// ── Security console ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct ModeResponse {
    mode: SecurityMode,
}

pub(crate) async fn security_mode(State(ctx): State<AppContext>) -> Json<ModeResponse> {
    Json(ModeResponse {
        mode: ctx.security.mode(),
    })
}

pub(crate) async fn toggle_security(State(ctx): State<AppContext>) -> Json<ModeResponse> {
    let mode = ctx.security.toggle_mode();
    info!(%mode, "security mode toggled");
    Json(ModeResponse { mode })
}

pub(crate) async fn security_log(State(ctx): State<AppContext>) -> Json<Vec<LogEntry>> {
    Json(ctx.audit.entries())
}

pub(crate) async fn clear_security_log(State(ctx): State<AppContext>) -> StatusCode {
    ctx.audit.clear();
    StatusCode::NO_CONTENT
}
