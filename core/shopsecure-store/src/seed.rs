//! Demo catalog seeding.
//!
//! Seeds the sample storefront used by the sandbox: eight products and two
//! reviews on the first one. Products are inserted with zero aggregates and
//! the reviews go through [`CommerceStore::create_review`], so the derived
//! rating/review_count invariants hold from the first observable state.

use crate::error::StoreResult;
use crate::store::CommerceStore;
use shopsecure_types::{NewProduct, NewReview, UserId};
use tracing::info;

/// Populates an empty store with the demo catalog.
pub fn seed_demo_catalog(store: &CommerceStore) -> StoreResult<()> {
    let products = [
        NewProduct {
            name: "Wireless Headphones".to_string(),
            description: "Premium wireless headphones with noise cancellation".to_string(),
            price: 12999,
            image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e".to_string(),
            category: "Electronics".to_string(),
        },
        NewProduct {
            name: "Smart Watch".to_string(),
            description: "Fitness tracker with heart rate monitoring".to_string(),
            price: 8999,
            image_url: "https://images.unsplash.com/photo-1546868871-7041f2a55e12".to_string(),
            category: "Electronics".to_string(),
        },
        NewProduct {
            name: "Bluetooth Speaker".to_string(),
            description: "Waterproof portable speaker with 24-hour battery".to_string(),
            price: 7999,
            image_url: "https://images.unsplash.com/photo-1585386959984-a4155224a1ad".to_string(),
            category: "Electronics".to_string(),
        },
        NewProduct {
            name: "Laptop Backpack".to_string(),
            description: "Anti-theft design with USB charging port".to_string(),
            price: 5999,
            image_url: "https://images.unsplash.com/photo-1588872657578-7efd1f1555ed".to_string(),
            category: "Accessories".to_string(),
        },
        NewProduct {
            name: "Mechanical Keyboard".to_string(),
            description: "RGB mechanical keyboard with customizable switches".to_string(),
            price: 9999,
            image_url: "https://images.unsplash.com/photo-1595044778792-9c2fc2d79fa5".to_string(),
            category: "Electronics".to_string(),
        },
        NewProduct {
            name: "Wireless Mouse".to_string(),
            description: "Ergonomic wireless mouse with long battery life".to_string(),
            price: 3999,
            image_url: "https://images.unsplash.com/photo-1615663245857-ac93bb7c39e7".to_string(),
            category: "Electronics".to_string(),
        },
        NewProduct {
            name: "USB-C Hub".to_string(),
            description: "Multiport adapter with HDMI, USB-A, and SD card slots".to_string(),
            price: 4999,
            image_url: "https://images.unsplash.com/photo-1636031452966-08f28ccfb151".to_string(),
            category: "Electronics".to_string(),
        },
        NewProduct {
            name: "Phone Stand".to_string(),
            description: "Adjustable aluminum phone stand for desk or bedside".to_string(),
            price: 1999,
            image_url: "https://images.unsplash.com/photo-1586953208448-b95a79798f07".to_string(),
            category: "Accessories".to_string(),
        },
    ];

    let mut first_product_id = None;
    for product in &products {
        let created = store.create_product(product)?;
        first_product_id.get_or_insert(created.id);
    }

    // The demo user id 0 belongs to no real account; these reviews exist so
    // the stored-injection surface has company on day one.
    if let Some(product_id) = first_product_id {
        store.create_review(&NewReview {
            product_id,
            user_id: UserId::new(0),
            username: "John D.".to_string(),
            title: "Amazing sound quality!".to_string(),
            content: "These headphones exceeded my expectations. The sound is crystal clear \
                      and the noise cancellation works perfectly, even in noisy environments."
                .to_string(),
            rating: 5,
        })?;
        store.create_review(&NewReview {
            product_id,
            user_id: UserId::new(0),
            username: "Sarah M.".to_string(),
            title: "Comfortable but a bit heavy".to_string(),
            content: "The sound quality is excellent, but I find them a bit heavy for \
                      extended wear. Battery life is impressive though!"
                .to_string(),
            rating: 4,
        })?;
    }

    info!(products = products.len(), "demo catalog seeded");
    Ok(())
}
