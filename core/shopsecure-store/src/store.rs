//! The commerce store: products, reviews, cart items.

use crate::error::{StoreError, StoreResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use shopsecure_types::{
    CartItem, CartItemId, NewCartItem, NewProduct, NewReview, Product, ProductId, Review, ReviewId,
    UserId,
};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Persistent store for the storefront, backed by SQLite.
pub struct CommerceStore {
    conn: Arc<Mutex<Connection>>,
}

impl CommerceStore {
    /// Opens (or creates) a store at the given path.
    pub fn new(path: &str) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory store (for testing and demo runs).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price INTEGER NOT NULL,
                image_url TEXT NOT NULL,
                category TEXT NOT NULL,
                rating INTEGER NOT NULL DEFAULT 0,
                review_count INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_id INTEGER NOT NULL REFERENCES products(id),
                user_id INTEGER NOT NULL,
                username TEXT NOT NULL,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                rating INTEGER NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS cart_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                product_id INTEGER NOT NULL REFERENCES products(id),
                quantity INTEGER NOT NULL,
                note TEXT,
                created_at TEXT NOT NULL,
                UNIQUE(user_id, product_id)
            );
            ",
        )?;
        Ok(())
    }

    // ── Products ─────────────────────────────────────────────────

    /// Inserts a product. Aggregates start at zero; only the review
    /// pipeline may change them.
    pub fn create_product(&self, input: &NewProduct) -> StoreResult<Product> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO products (name, description, price, image_url, category, rating, review_count, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 0, 0, ?6)",
            params![
                input.name,
                input.description,
                input.price,
                input.image_url,
                input.category,
                Utc::now(),
            ],
        )?;
        let id = conn.last_insert_rowid();
        let product = conn.query_row(
            &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
            params![id],
            product_from_row,
        )?;
        Ok(product)
    }

    /// Returns all products.
    pub fn products(&self) -> StoreResult<Vec<Product>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"))?;
        let rows = stmt.query_map([], product_from_row)?;
        collect_rows(rows)
    }

    /// Returns a product by id, or `None`.
    pub fn product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let conn = self.conn.lock().unwrap();
        let product = conn
            .query_row(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
                params![id.as_i64()],
                product_from_row,
            )
            .optional()?;
        Ok(product)
    }

    /// Returns the products in a category.
    pub fn products_by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = ?1 ORDER BY id"
        ))?;
        let rows = stmt.query_map(params![category], product_from_row)?;
        collect_rows(rows)
    }

    /// Case-insensitive substring search over name and description.
    /// An empty query matches every product.
    pub fn search_products(&self, query: &str) -> StoreResult<Vec<Product>> {
        let needle = query.to_lowercase();
        let all = self.products()?;
        Ok(all
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect())
    }

    // ── Reviews ──────────────────────────────────────────────────

    /// Returns the reviews for a product.
    pub fn reviews_for_product(&self, product_id: ProductId) -> StoreResult<Vec<Review>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE product_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt.query_map(params![product_id.as_i64()], review_from_row)?;
        collect_rows(rows)
    }

    /// Inserts a review and updates the owning product's aggregate.
    ///
    /// The aggregate is recomputed from the persisted review set inside the
    /// same transaction as the insert, so the new review and the updated
    /// rating/review_count become visible together, and two concurrent
    /// submissions cannot overwrite each other's recompute.
    ///
    /// `rating` must be 1–5; the submitted text fields are stored verbatim.
    pub fn create_review(&self, input: &NewReview) -> StoreResult<Review> {
        if !(1..=5).contains(&input.rating) {
            return Err(StoreError::Validation(
                "rating must be between 1 and 5".to_string(),
            ));
        }

        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        let product_exists = tx
            .query_row(
                "SELECT 1 FROM products WHERE id = ?1",
                params![input.product_id.as_i64()],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !product_exists {
            return Err(StoreError::NotFound(format!(
                "product {}",
                input.product_id
            )));
        }

        tx.execute(
            "INSERT INTO reviews (product_id, user_id, username, title, content, rating, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                input.product_id.as_i64(),
                input.user_id.as_i64(),
                input.username,
                input.title,
                input.content,
                input.rating,
                Utc::now(),
            ],
        )?;
        let id = tx.last_insert_rowid();

        // Round-half-up mean in integer arithmetic: (2*sum + n) / (2*n).
        tx.execute(
            "UPDATE products SET
                 review_count = (SELECT COUNT(*) FROM reviews WHERE product_id = ?1),
                 rating = (SELECT (2 * SUM(rating) + COUNT(*)) / (2 * COUNT(*))
                           FROM reviews WHERE product_id = ?1)
             WHERE id = ?1",
            params![input.product_id.as_i64()],
        )?;

        let review = tx.query_row(
            &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?1"),
            params![id],
            review_from_row,
        )?;
        tx.commit()?;

        debug!(review = %review.id, product = %review.product_id, "review created");
        Ok(review)
    }

    // ── Cart ─────────────────────────────────────────────────────

    /// Returns a user's cart items.
    pub fn cart_items_for_user(&self, user_id: UserId) -> StoreResult<Vec<CartItem>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {CART_COLUMNS} FROM cart_items WHERE user_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt.query_map(params![user_id.as_i64()], cart_item_from_row)?;
        collect_rows(rows)
    }

    /// Returns a cart item by id, or `None`.
    pub fn cart_item(&self, id: CartItemId) -> StoreResult<Option<CartItem>> {
        let conn = self.conn.lock().unwrap();
        let item = conn
            .query_row(
                &format!("SELECT {CART_COLUMNS} FROM cart_items WHERE id = ?1"),
                params![id.as_i64()],
                cart_item_from_row,
            )
            .optional()?;
        Ok(item)
    }

    /// Adds a product to a cart, merging with an existing row.
    ///
    /// At most one row exists per (user, product): if one is already there,
    /// its quantity grows by `input.quantity` in a single upsert statement
    /// and its note is left untouched; otherwise a new row is inserted with
    /// the note stored verbatim. Quantity must be >= 1.
    pub fn add_cart_item(&self, input: &NewCartItem) -> StoreResult<CartItem> {
        if input.quantity < 1 {
            return Err(StoreError::Validation(
                "quantity must be a positive integer".to_string(),
            ));
        }

        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        let product_exists = tx
            .query_row(
                "SELECT 1 FROM products WHERE id = ?1",
                params![input.product_id.as_i64()],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !product_exists {
            return Err(StoreError::NotFound(format!(
                "product {}",
                input.product_id
            )));
        }

        tx.execute(
            "INSERT INTO cart_items (user_id, product_id, quantity, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id, product_id)
             DO UPDATE SET quantity = quantity + excluded.quantity",
            params![
                input.user_id.as_i64(),
                input.product_id.as_i64(),
                input.quantity,
                input.note,
                Utc::now(),
            ],
        )?;

        let item = tx.query_row(
            &format!("SELECT {CART_COLUMNS} FROM cart_items WHERE user_id = ?1 AND product_id = ?2"),
            params![input.user_id.as_i64(), input.product_id.as_i64()],
            cart_item_from_row,
        )?;
        tx.commit()?;
        Ok(item)
    }

    /// Overwrites the quantity on a cart row. Quantity must be >= 1.
    pub fn update_cart_item_quantity(
        &self,
        id: CartItemId,
        quantity: i64,
    ) -> StoreResult<CartItem> {
        if quantity < 1 {
            return Err(StoreError::Validation(
                "quantity must be a positive integer".to_string(),
            ));
        }

        let conn = self.conn.lock().unwrap();
        let changed = conn.execute(
            "UPDATE cart_items SET quantity = ?2 WHERE id = ?1",
            params![id.as_i64(), quantity],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(format!("cart item {id}")));
        }
        let item = conn.query_row(
            &format!("SELECT {CART_COLUMNS} FROM cart_items WHERE id = ?1"),
            params![id.as_i64()],
            cart_item_from_row,
        )?;
        Ok(item)
    }

    /// Stores a note on a cart row, verbatim. No escaping, no validation of
    /// the content — sanitization is deferred to render time, never done at
    /// storage time.
    pub fn update_cart_item_note(&self, id: CartItemId, note: &str) -> StoreResult<CartItem> {
        let conn = self.conn.lock().unwrap();
        let changed = conn.execute(
            "UPDATE cart_items SET note = ?2 WHERE id = ?1",
            params![id.as_i64(), note],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(format!("cart item {id}")));
        }
        let item = conn.query_row(
            &format!("SELECT {CART_COLUMNS} FROM cart_items WHERE id = ?1"),
            params![id.as_i64()],
            cart_item_from_row,
        )?;
        Ok(item)
    }

    /// Deletes a cart row. Missing rows are a not-found condition for the
    /// caller to surface.
    pub fn remove_cart_item(&self, id: CartItemId) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let changed = conn.execute(
            "DELETE FROM cart_items WHERE id = ?1",
            params![id.as_i64()],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(format!("cart item {id}")));
        }
        Ok(())
    }
}

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, image_url, category, rating, review_count, created_at";
const REVIEW_COLUMNS: &str =
    "id, product_id, user_id, username, title, content, rating, created_at";
const CART_COLUMNS: &str = "id, user_id, product_id, quantity, note, created_at";

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: ProductId::new(row.get(0)?),
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        image_url: row.get(4)?,
        category: row.get(5)?,
        rating: row.get(6)?,
        review_count: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn review_from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: ReviewId::new(row.get(0)?),
        product_id: ProductId::new(row.get(1)?),
        user_id: UserId::new(row.get(2)?),
        username: row.get(3)?,
        title: row.get(4)?,
        content: row.get(5)?,
        rating: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn cart_item_from_row(row: &Row<'_>) -> rusqlite::Result<CartItem> {
    Ok(CartItem {
        id: CartItemId::new(row.get(0)?),
        user_id: UserId::new(row.get(1)?),
        product_id: ProductId::new(row.get(2)?),
        quantity: row.get(3)?,
        note: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn collect_rows<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> StoreResult<Vec<T>> {
    let mut result = Vec::new();
    for row in rows {
        result.push(row?);
    }
    Ok(result)
}
