//! HTTP route handlers for the storefront.
//!
//! Pages are served as JSON for the client to render; purchase steps answer
//! with `303 See Other` redirects to the next step.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (store reachable)
//!
//! # Browsing
//! GET  /                        - Landing page: collections and confectionery
//! GET  /search?q=               - Product name search
//! GET  /category/{category}     - Products in a category
//! GET  /products/{id}           - Product detail
//!
//! # Wishlist
//! GET  /wishlist                - Wishlisted products
//! POST /wishlist/{id}/toggle    - Add or remove a product
//!
//! # Purchase
//! POST /products/{id}/buy       - Pick unit and quantity, go to checkout
//! GET  /checkout                - Pending item
//! POST /checkout                - Validate details, go to payment
//! GET  /payment                 - Payment instructions (UPI QR or COD)
//! GET  /payment/confirm         - Redirect to WhatsApp with the order
//!
//! # Admin (requires login)
//! POST   /admin/login           - Log in with the admin password
//! POST   /admin/logout          - Log out
//! GET    /admin/products        - All products
//! POST   /admin/products        - Create product
//! PUT    /admin/products/{id}   - Replace product
//! DELETE /admin/products/{id}   - Delete product
//! GET    /admin/sections        - Collections
//! POST   /admin/sections        - Add collection
//! DELETE /admin/sections/{name} - Remove collection
//! ```

pub mod admin;
pub mod category;
pub mod checkout;
pub mod health;
pub mod home;
pub mod payment;
pub mod products;
pub mod search;
pub mod wishlist;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(products::show))
        .route("/{id}/buy", post(products::buy))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/{id}/toggle", post(wishlist::toggle))
}

/// Create the payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(payment::show))
        .route("/confirm", get(payment::confirm))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        .route(
            "/products",
            get(admin::list_products).post(admin::create_product),
        )
        .route(
            "/products/{id}",
            put(admin::update_product).delete(admin::delete_product),
        )
        .route(
            "/sections",
            get(admin::list_sections).post(admin::create_section),
        )
        .route("/sections/{name}", axum::routing::delete(admin::delete_section))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/", get(home::home))
        .route("/search", get(search::search))
        .route("/category/{category}", get(category::show))
        .nest("/products", product_routes())
        .nest("/wishlist", wishlist_routes())
        .route("/checkout", get(checkout::show).post(checkout::submit))
        .nest("/payment", payment_routes())
        .nest("/admin", admin_routes())
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Page not found" })))
}
